//! Tests for error types

use prometheus_arrival_scheduler::core::SchedulerError;

#[test]
fn test_config_error() {
    let err = SchedulerError::Config("no modes".to_string());
    assert_eq!(format!("{}", err), "invalid configuration: no modes");
}

#[test]
fn test_unknown_case_error() {
    let err = SchedulerError::UnknownCase(17);
    assert_eq!(format!("{}", err), "unknown case: 17");
}

#[test]
fn test_upstream_error() {
    let err = SchedulerError::Upstream("generator offline".to_string());
    assert_eq!(format!("{}", err), "upstream failure: generator offline");
}

#[test]
fn test_driver_closed_error() {
    let err = SchedulerError::DriverClosed;
    assert_eq!(format!("{}", err), "arrival driver closed");
}
