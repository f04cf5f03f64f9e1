//! `--output-fd` streams JSON-lines events to a parent process.

use crate::prelude::*;

#[test]
fn events_stream_to_the_descriptor() {
    let project = Project::empty();
    project.file("ok.cpp", "");
    project.file("bad.cpp", "syntax error\n");
    project.file("cl.cpp", "// caliber -c cl\n");

    let run = project.caliber().args(&["--output-fd", "1", "ok.cpp", "bad.cpp", "cl.cpp"]).passes();
    let events = run.events();
    let kinds: Vec<&str> = events.iter().map(|e| e["event"].as_str().unwrap()).collect();
    similar_asserts::assert_eq!(
        kinds,
        vec![
            "started_run",
            "started_suite",
            "started_test",
            "passed_test",
            "started_test",
            "failed_test",
            "skipped_test",
            "ended_suite",
            "ended_run",
        ]
    );

    assert_eq!(events[1]["suite"], "compilation tests");
    assert_eq!(events[3]["test"]["name"], "ok.cpp");
    assert_eq!(events[5]["test"]["name"], "bad.cpp");
    assert!(events[5]["message"].as_str().unwrap().ends_with("\nCompilation failed"));
    assert!(events[5]["output"]["stderr"].as_str().unwrap().contains("expected unqualified-id"));
    assert_eq!(events[6]["reason"], "skipped for g++");
}

#[test]
fn test_ids_increase() {
    let project = Project::empty();
    project.file("a.cpp", "");
    project.file("b.cpp", "");

    let run = project.caliber().args(&["--output-fd", "1", "a.cpp", "b.cpp"]).passes();
    let ids: Vec<u64> = run
        .events()
        .iter()
        .filter(|e| e["event"] == "passed_test")
        .map(|e| e["test"]["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[0] < ids[1]);
}

#[test]
fn closed_descriptor_is_bad_args() {
    let project = Project::empty();
    project.file("ok.cpp", "");

    project
        .caliber()
        .args(&["--output-fd", "987654", "ok.cpp"])
        .exits(2)
        .stderr_has("caliber: unable to open output fd 987654");
}
