//! Library-level tests for the composed entry point

use std::panic::{self, AssertUnwindSafe};

use demoapp::infrastructure::adapters::ConsoleSink;
use demoapp::infrastructure::config::Config;
use demoapp::planets::{message_from_a, message_from_b};

#[test]
fn test_run_does_not_panic() {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut sink = ConsoleSink::new(Vec::new());
        demoapp::run(&Config::default(), &mut sink)
    }));
    assert!(result.is_ok(), "run panicked, this should not happen!");
}

#[test]
fn test_run_output() {
    let mut sink = ConsoleSink::new(Vec::new());
    demoapp::run(&Config::default(), &mut sink).unwrap();
    let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();

    let expected = format!(
        "ADVANCED SINGLE command\n{}\n{}\n{}\n",
        "-".repeat(20),
        message_from_a(),
        message_from_b()
    );
    assert_eq!(out, expected);
}

#[test]
fn test_messages() {
    assert_eq!(message_from_a(), "I come from planet A");
    assert_eq!(message_from_b(), "I come from planet B!");
    assert_ne!(message_from_a(), message_from_b());
}
