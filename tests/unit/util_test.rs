//! Tests for utility functions

use std::time::Duration;

use prometheus_arrival_scheduler::util::{Clock, ManualClock, TimerHandle, CaseId, init_tracing};

#[test]
fn test_timer_handle_display() {
    assert_eq!(TimerHandle(7).to_string(), "timer-7");
}

#[test]
fn test_timer_handle_ordering() {
    assert!(TimerHandle(1) < TimerHandle(2));
}

#[test]
fn test_case_id() {
    let id: CaseId = 12345;
    assert_eq!(id, 12345);
}

#[test]
fn test_manual_clock_advance() {
    let clock = ManualClock::new(100);
    clock.advance(Duration::from_millis(250));
    assert_eq!(clock.now_ms(), 350);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
