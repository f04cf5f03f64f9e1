//! End-to-end compilation scenarios against a fake gcc.

use crate::prelude::*;
use caliber_core::test_support::recorded_calls;

#[test]
fn clean_file_passes() {
    let project = Project::empty();
    project.file("ok.cpp", "int main() {}\n");

    project.caliber().args(&["ok.cpp"]).passes().stdout_has(".\n").stdout_has("1/1 tests passed");
}

#[test]
fn expected_failure_passes() {
    let project = Project::empty();
    project.file("bad.cpp", "// caliber -F\nsyntax error\n");

    project.caliber().args(&["-o", "verbose", "bad.cpp"]).passes().stdout_has("bad.cpp PASSED");
}

#[test]
fn unexpected_failure_fails_with_diagnostics() {
    let project = Project::empty();
    project.file("bad.cpp", "syntax error\n");

    project
        .caliber()
        .args(&["-o", "verbose", "bad.cpp"])
        .fails()
        .stdout_has("bad.cpp FAILED")
        .stdout_has("Compilation failed")
        .stdout_has("| bad.cpp:1:1: error: expected unqualified-id")
        .stdout_has("0/1 tests passed");
}

#[test]
fn unexpected_success_fails() {
    let project = Project::empty();
    project.file("fine.cpp", "// caliber -F\nint x;\n");

    project.caliber().args(&["fine.cpp"]).fails().stdout_has("Compilation successful");
}

#[test]
fn tool_filter_skips_other_compilers() {
    let project = Project::empty();
    project.file("msvc.cpp", "// caliber -c msvc\n");

    project
        .caliber()
        .args(&["-o", "verbose", "msvc.cpp"])
        .passes()
        .stdout_has("msvc.cpp SKIPPED (skipped for g++)")
        .stdout_has("0/1 tests passed (1 skipped)");
}

#[test]
fn tool_filter_by_brand_runs() {
    let project = Project::empty();
    project.file("gcc.cpp", "// caliber -c gcc\n");

    project.caliber().args(&["-o", "verbose", "gcc.cpp"]).passes().stdout_has("gcc.cpp PASSED");
}

#[test]
fn mixed_run_reports_every_file() {
    let project = Project::empty();
    project.file("a.cpp", "");
    project.file("b.cpp", "syntax error\n");
    project.file("c.cpp", "// caliber -a skip\n");

    project
        .caliber()
        .args(&["a.cpp", "b.cpp", "c.cpp"])
        .fails()
        .stdout_has(".!_\n")
        .stdout_has("1/3 tests passed (1 skipped)")
        .stdout_has("compilation tests > b.cpp FAILED");
}

#[test]
fn suite_name_appears_in_report() {
    let project = Project::empty();
    project.file("b.cpp", "syntax error\n");

    project.caliber().args(&["-S", "parser", "b.cpp"]).fails().stdout_has("parser > b.cpp FAILED");
}

#[test]
fn show_time_prints_durations() {
    let project = Project::empty();
    project.file("ok.cpp", "");

    project
        .caliber()
        .args(&["-o", "verbose", "--show-time", "ok.cpp"])
        .passes()
        .stdout_has(" ms)");
}

#[test]
fn wrapper_command_runs_the_real_compiler() {
    let project = Project::empty();
    let gxx = project.compiler("g++", FakeBanner::Gcc);
    project.file("ok.cpp", "");
    let command = format!("env {}", gxx.display());

    cli()
        .args(&["--compiler", &command, "ok.cpp"])
        .current_dir(project.path())
        .passes()
        .stdout_has("1/1 tests passed");
    assert_eq!(recorded_calls(&gxx).last().map(String::as_str), Some("-fsyntax-only ok.cpp"));
}

#[test]
fn compiler_defaults_to_cxx() {
    let project = Project::empty();
    let gxx = project.compiler("g++", FakeBanner::Gcc);
    project.file("ok.cpp", "");

    cli()
        .env("CXX", &gxx)
        .args(&["ok.cpp"])
        .current_dir(project.path())
        .passes()
        .stdout_has("1/1 tests passed");
    assert_eq!(recorded_calls(&gxx), ["-fsyntax-only ok.cpp"]);
}

#[test]
fn msvc_dialect_arguments() {
    let project = Project::empty();
    let cl = project.compiler("cl", FakeBanner::Msvc);
    project.file("src/t.cpp", "/* caliber --std c++17 -I inc -D FOO -X msvc=/W4 -X cc=-Wall */\n");

    cli()
        .arg("--compiler")
        .arg(&cl)
        .args(&["src/t.cpp"])
        .current_dir(project.path())
        .passes();
    assert_eq!(recorded_calls(&cl), ["/std:c++17 /Isrc/inc /DFOO /W4 /Zs src/t.cpp"]);
}
