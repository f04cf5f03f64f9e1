// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::{json, Value};

fn lines(logger: ChildLogger<Vec<u8>>) -> Vec<Value> {
    let bytes = logger.into_inner();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn run_events_are_tagged() {
    let mut logger = ChildLogger::new(Vec::new());
    logger.started_run();
    logger.started_suite("compilation tests");
    logger.ended_suite("compilation tests");
    logger.ended_run();

    assert_eq!(
        lines(logger),
        vec![
            json!({"event": "started_run"}),
            json!({"event": "started_suite", "suite": "compilation tests"}),
            json!({"event": "ended_suite", "suite": "compilation tests"}),
            json!({"event": "ended_run"}),
        ]
    );
}

#[test]
fn failed_test_carries_message_and_output() {
    let mut logger = ChildLogger::new(Vec::new());
    let name = TestName::next("compilation tests", "bad.cpp");
    let output = TestOutput { stdout: String::new(), stderr: "bad.cpp:1:1: error\n".into() };
    logger.failed_test(&name, "c++ bad.cpp\nCompilation failed", &output, Duration::from_millis(42));

    let events = lines(logger);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        json!({
            "event": "failed_test",
            "test": {"suite": "compilation tests", "name": "bad.cpp", "id": name.id},
            "message": "c++ bad.cpp\nCompilation failed",
            "output": {"stdout": "", "stderr": "bad.cpp:1:1: error\n"},
            "duration_ms": 42,
        })
    );
}

#[test]
fn skipped_test_has_reason() {
    let mut logger = ChildLogger::new(Vec::new());
    let name = TestName::next("compilation tests", "msvc.cpp");
    logger.skipped_test(&name, "skipped for g++");

    let events = lines(logger);
    assert_eq!(events[0]["event"], "skipped_test");
    assert_eq!(events[0]["reason"], "skipped for g++");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_do_not_panic() {
    let mut logger = ChildLogger::new(BrokenPipe);
    logger.started_run();
    logger.passed_test(
        &TestName::next("compilation tests", "ok.cpp"),
        &TestOutput::default(),
        Duration::ZERO,
    );
}
