//! SIGINT against the driver takes the compiler's whole group down with it.

use std::os::unix::process::ExitStatusExt;
use std::time::Duration;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::prelude::*;

#[test]
fn interrupt_kills_background_children_and_the_driver() {
    let project = Project::empty();
    let gxx = project.compiler("g++", FakeBanner::Gcc);
    let source = project.file("bg.cpp", "// caliber-background\n");
    let bgpid = source.with_extension("cpp.bgpid");

    let mut driver = spawn_caliber(&project, &gxx, "bg.cpp");
    assert!(eventually(|| read_pid(&bgpid).is_some()), "compiler never started its background job");
    let sleeper = read_pid(&bgpid).expect("background pid");

    kill(Pid::from_raw(driver.id() as i32), Signal::SIGINT).expect("signal driver");

    let mut status = None;
    for _ in 0..500 {
        status = driver.try_wait().expect("poll driver");
        if status.is_some() {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    let Some(status) = status else {
        let _ = driver.kill();
        panic!("driver survived SIGINT");
    };
    assert_eq!(status.signal(), Some(Signal::SIGINT as i32), "driver exited with {status:?}");
    assert!(eventually(|| !is_alive(sleeper)), "background sleep {sleeper} outlived the driver");
}
