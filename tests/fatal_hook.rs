//! Termination policy test.
//!
//! `FatalHook` ends the process, so it is exercised in a child copy of this
//! test binary rather than in-process. The child re-runs the same test with
//! an environment marker set, takes the hook path, and must never reach the
//! code after the report.

use growline::{reader, ErrorHook, ErrorKind, FatalHook};
use std::env;
use std::process::Command;

const CHILD_MARKER: &str = "GROWLINE_FATAL_CHILD";

#[test]
fn fatal_hook_prints_and_terminates() {
    if env::var_os(CHILD_MARKER).is_some() {
        // Child: force an allocation failure with the fatal hook installed.
        let hook = FatalHook::with_code(3);
        let _ = reader::zeroed(usize::MAX, &hook);
        unreachable!("FatalHook must not return from on_error");
    }

    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["--exact", "fatal_hook_prints_and_terminates", "--nocapture"])
        .env(CHILD_MARKER, "1")
        .output()
        .expect("spawn child test process");

    assert_eq!(output.status.code(), Some(3));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(ErrorKind::Alloc.message()),
        "missing diagnostic in child stderr: {stderr}"
    );
    assert!(
        stderr.contains("fatal_hook.rs"),
        "diagnostic does not name the reporting file: {stderr}"
    );
}

#[test]
fn fatal_hook_report_location_is_the_failing_call_site() {
    // Sanity-check the location plumbing without terminating: the same report
    // a FatalHook would print must carry this file's name.
    struct Capture(std::cell::RefCell<String>);

    impl ErrorHook for Capture {
        fn on_error(&self, report: &growline::Report<'_>) {
            *self.0.borrow_mut() = report.to_string();
        }
    }

    let hook = Capture(std::cell::RefCell::new(String::new()));
    let _ = reader::zeroed(usize::MAX, &hook);

    let text = hook.0.borrow();
    assert!(text.contains("fatal_hook.rs"), "got: {text}");
    assert!(text.contains(ErrorKind::Alloc.message()));
}
