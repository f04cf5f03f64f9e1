//! Per-file directives and test filters.

use crate::prelude::*;
use caliber_core::test_support::recorded_calls;

#[test]
fn malformed_directive_fails_only_that_test() {
    let project = Project::empty();
    project.file("broken.cpp", "// caliber -n 'unterminated\n");
    project.file("ok.cpp", "");

    project
        .caliber()
        .args(&["-o", "verbose", "broken.cpp", "ok.cpp"])
        .fails()
        .stdout_has("broken.cpp FAILED")
        .stdout_has("malformed directive: unterminated single quote")
        .stdout_has("ok.cpp PASSED");
}

#[test]
fn name_option_renames_test() {
    let project = Project::empty();
    project.file("x.cpp", "/* caliber\n   --name \"renamed test\"\n */\n");

    project.caliber().args(&["-o", "verbose", "x.cpp"]).passes().stdout_has("renamed test PASSED");
}

#[test]
fn includes_are_relative_to_the_source() {
    let project = Project::empty();
    project.file("tests/inc.cpp", "// caliber -I include -D DEBUG=1 --std c++20\n");

    project.caliber().args(&["tests/inc.cpp"]).passes();
    let gxx = project.path().join("bin/g++");
    assert_eq!(
        recorded_calls(&gxx),
        ["-Itests/include -DDEBUG=1 -std=c++20 -fsyntax-only tests/inc.cpp"]
    );
}

#[test]
fn raw_options_are_scoped() {
    let project = Project::empty();
    project.file("raw.cpp", "// caliber -X -Wall -X msvc=/W4 -X gcc=-Wextra\n");

    project.caliber().args(&["raw.cpp"]).passes();
    let gxx = project.path().join("bin/g++");
    assert_eq!(recorded_calls(&gxx), ["-Wall -Wextra -fsyntax-only raw.cpp"]);
}

#[test]
fn custom_marker() {
    let project = Project::empty();
    project.file("m.cpp", "// check -F\nsyntax error\n");

    project.caliber().args(&["--marker", "check", "m.cpp"]).passes();
}

#[test]
fn name_filter_hides_other_tests() {
    let project = Project::empty();
    project.file("keep.cpp", "");
    project.file("other.cpp", "syntax error\n");

    project
        .caliber()
        .args(&["-T", "^keep", "-o", "verbose", "keep.cpp", "other.cpp"])
        .passes()
        .stdout_has("1/1 tests passed")
        .stdout_lacks("other.cpp");
}

#[test]
fn attribute_filter_selects_tests() {
    let project = Project::empty();
    project.file("slow.cpp", "// caliber -a slow -a skip\n");
    project.file("fast.cpp", "syntax error\n");

    project
        .caliber()
        .args(&["-A", "slow", "-o", "verbose", "slow.cpp", "fast.cpp"])
        .passes()
        .stdout_has("slow.cpp PASSED")
        .stdout_lacks("fast.cpp");
}

#[test]
fn negated_attribute_filter_hides_tests() {
    let project = Project::empty();
    project.file("slow.cpp", "// caliber -a slow\nsyntax error\n");
    project.file("fast.cpp", "");

    project
        .caliber()
        .args(&["-A", "!slow", "-o", "verbose", "slow.cpp", "fast.cpp"])
        .passes()
        .stdout_has("fast.cpp PASSED")
        .stdout_lacks("slow.cpp");
}
