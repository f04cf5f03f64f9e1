//! Timeouts kill the compiler's whole process group.

use std::time::{Duration, Instant};

use crate::prelude::*;

#[test]
fn hanging_compiler_times_out() {
    let project = Project::empty();
    let hang = project.file("hang.cpp", "int x; // caliber-hang\n");

    let started = Instant::now();
    project
        .caliber()
        .args(&["-t", "100", "-o", "verbose", "hang.cpp"])
        .fails()
        .stdout_has("hang.cpp FAILED")
        .stdout_has("Timed out after 100 ms");
    assert!(started.elapsed() < Duration::from_secs(10));

    let pid = read_pid(&hang.with_extension("cpp.pid")).expect("hanging compiler recorded its pid");
    assert!(eventually(|| !is_alive(pid)), "compiler {pid} survived the timeout");
}

#[test]
fn timeout_only_fails_the_hanging_test() {
    let project = Project::empty();
    project.file("hang.cpp", "// caliber-hang\n");
    project.file("ok.cpp", "");

    project
        .caliber()
        .args(&["-t", "200", "hang.cpp", "ok.cpp"])
        .fails()
        .stdout_has("!.\n")
        .stdout_has("1/2 tests passed")
        .stdout_has("Timed out after 200 ms");
}

#[test]
fn timeout_is_reported_even_when_failure_expected() {
    let project = Project::empty();
    project.file("hang.cpp", "// caliber -F\n// caliber-hang\n");

    project.caliber().args(&["-t", "100", "hang.cpp"]).fails().stdout_has("Timed out after 100 ms");
}

#[test]
fn fast_compiles_are_unaffected_by_timeout() {
    let project = Project::empty();
    project.file("ok.cpp", "");

    project.caliber().args(&["-t", "10000", "ok.cpp"]).passes();
}
