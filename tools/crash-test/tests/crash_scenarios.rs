//! Crash Scenario Tests
//!
//! End-to-end tests that spawn the crash-test driver, trigger each
//! monitored fault kind, and assert on the parent-visible wait status
//! and on the report text:
//! - Termination happens via the original signal (default OS action)
//! - The ephemeral report carries the documented signal/cause lines
//! - The durable log degrades silently when unwritable
//! - Re-installation stays idempotent (one fault, one report)

#![cfg(unix)]

use std::os::unix::process::ExitStatusExt;
use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_log(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("crash-test-{tag}-{}.log", std::process::id()))
}

fn run_driver(args: &[&str]) -> Output {
    let _ = env_logger::builder().is_test(true).try_init();
    Command::new(env!("CARGO_BIN_EXE_crash-test"))
        .args(args)
        .output()
        .expect("failed to spawn crash-test driver")
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ============================================================================
// Termination Signal Tests
// ============================================================================

#[test]
fn test_selector_1_terminates_via_sigfpe() {
    let log = unique_log("fpe");
    let output = run_driver(&["1", "--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGFPE));
    let report = stderr_text(&output);
    assert!(report.contains("CRASH DETECTED"));
    assert!(report.contains("Signal: SIGFPE"));
    assert!(report.contains("division by zero"));

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_selector_2_terminates_via_sigabrt() {
    let log = unique_log("abrt");
    let output = run_driver(&["2", "--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGABRT));
    let report = stderr_text(&output);
    assert!(report.contains("Signal: SIGABRT"));
    assert!(report.contains("program aborted or assertion failed"));

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_selector_0_terminates_via_sigsegv_with_fault_address() {
    let log = unique_log("segv");
    let output = run_driver(&["0", "--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGSEGV));
    let report = stderr_text(&output);
    assert!(report.contains("Signal: SIGSEGV"));
    assert!(report.contains("memory access violation"));

    let addr_line = report
        .lines()
        .find(|line| line.starts_with("Fault address: "))
        .expect("report should carry a fault address line");
    let addr = addr_line.trim_start_matches("Fault address: ").trim();
    assert!(addr.starts_with("0x"));
    assert_ne!(addr, "0x0");

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_no_selector_defaults_to_sigsegv() {
    let log = unique_log("default");
    let output = run_driver(&["--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGSEGV));
    assert!(stderr_text(&output).contains("Signal: SIGSEGV"));

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_unknown_selector_falls_back_to_sigsegv() {
    let log = unique_log("fallback");
    let output = run_driver(&["9", "--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGSEGV));

    let _ = std::fs::remove_file(log);
}

// ============================================================================
// Report Content Tests
// ============================================================================

#[test]
fn test_report_carries_timestamp_and_banner() {
    let log = unique_log("banner");
    let output = run_driver(&["2", "--log-path", log.to_str().unwrap()]);

    let report = stderr_text(&output);
    assert!(report.contains("========================================"));
    assert!(report.contains("Time: "));
    assert!(report.contains("To help fix this issue, please:"));

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_durable_log_mirrors_report_without_remediation() {
    let log = unique_log("durable");
    let _ = std::fs::remove_file(&log);
    let output = run_driver(&["1", "--log-path", log.to_str().unwrap()]);

    assert!(stderr_text(&output).contains(&format!("Crash log written to: {}", log.display())));

    let contents = std::fs::read_to_string(&log).expect("durable log should exist");
    assert!(contents.contains("CRASH LOG"));
    assert!(contents.contains("Signal: SIGFPE"));
    assert!(!contents.contains("To help fix this issue"));

    let _ = std::fs::remove_file(log);
}

#[test]
fn test_durable_log_appends_across_crashes() {
    let log = unique_log("append");
    let _ = std::fs::remove_file(&log);
    run_driver(&["2", "--log-path", log.to_str().unwrap()]);
    run_driver(&["2", "--log-path", log.to_str().unwrap()]);

    let contents = std::fs::read_to_string(&log).expect("durable log should exist");
    assert_eq!(contents.matches("CRASH LOG").count(), 2);

    let _ = std::fs::remove_file(log);
}

// ============================================================================
// Degradation and Idempotency Tests
// ============================================================================

#[test]
fn test_unwritable_durable_log_keeps_ephemeral_report_complete() {
    // 目录不存在，追加打开必然失败
    let log = "/nonexistent-crash-test-dir/crash.log";
    let output = run_driver(&["2", "--log-path", log]);

    assert_eq!(output.status.signal(), Some(libc::SIGABRT));
    let report = stderr_text(&output);
    assert!(report.contains("Signal: SIGABRT"));
    assert!(report.contains("Cause: program aborted or assertion failed"));
    assert!(report.contains("To help fix this issue, please:"));
    assert!(!report.contains("Crash log written to:"));
}

#[test]
fn test_reinstall_produces_single_report() {
    let log = unique_log("reinstall");
    let output = run_driver(&["2", "--reinstall", "--log-path", log.to_str().unwrap()]);

    assert_eq!(output.status.signal(), Some(libc::SIGABRT));
    let report = stderr_text(&output);
    assert_eq!(report.matches("CRASH DETECTED").count(), 1);

    let _ = std::fs::remove_file(log);
}
