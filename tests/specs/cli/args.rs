//! Argument errors and their exit statuses.

use crate::prelude::*;

#[test]
fn no_inputs_exits_3() {
    cli().exits(3).stderr_has("caliber: no inputs specified");
}

#[test]
fn unknown_flag_exits_2() {
    cli().args(&["--bogus", "a.cpp"]).exits(2).stderr_has("caliber: unexpected argument '--bogus'");
}

#[test]
fn bad_output_format_exits_2() {
    cli().args(&["-o", "loud", "a.cpp"]).exits(2).stderr_has("caliber: ");
}

#[test]
fn bad_test_pattern_exits_2() {
    cli().args(&["-T", "(", "a.cpp"]).exits(2).stderr_has("caliber: invalid test name pattern `(`");
}

#[test]
fn output_fd_with_output_option_exits_2() {
    cli()
        .args(&["--output-fd", "1", "-o", "verbose", "a.cpp"])
        .exits(2)
        .stderr_has("cannot be used with");
}

#[test]
fn missing_compiler_exits_64() {
    cli()
        .args(&["--compiler", "/nonexistent/caliber-cc", "a.cpp"])
        .exits(64)
        .stderr_has("caliber: unable to use compiler `/nonexistent/caliber-cc`");
}

#[test]
fn undetectable_compiler_exits_64() {
    let project = Project::empty();
    let silent = project.compiler("mystery", FakeBanner::Silent);
    let file = project.file("ok.cpp", "");
    cli()
        .arg("--compiler")
        .arg(&silent)
        .arg(&file)
        .exits(64)
        .stderr_has("unable to determine compiler flavor");
}

#[test]
fn unbalanced_compiler_command_exits_2() {
    cli().args(&["--compiler", "g++ 'oops", "a.cpp"]).exits(2).stderr_has("invalid compiler command");
}
