//! Tests for scheduler builders

use prometheus_arrival_scheduler::builders::{build_scheduler, build_scheduler_from_json};
use prometheus_arrival_scheduler::config::SchedulerConfig;
use prometheus_arrival_scheduler::core::{AdmissionOutcome, AuditAction, SchedulerError};
use prometheus_arrival_scheduler::infra::{
    InMemoryCaseRegistry, ManualTimer, RecordingNotifier, SequentialCaseSource,
};
use prometheus_arrival_scheduler::util::ManualClock;

#[test]
fn test_build_scheduler_wires_audit() {
    let clock = ManualClock::new(0);
    let built = build_scheduler(
        &SchedulerConfig::default(),
        SequentialCaseSource::new("case"),
        InMemoryCaseRegistry::new(),
        clock.clone(),
        ManualTimer::new(clock),
        RecordingNotifier::new(),
    )
    .unwrap();

    let mut scheduler = built.scheduler;
    let audit = built.audit.expect("audit enabled by default");
    assert_eq!(scheduler.request_admission().unwrap(), AdmissionOutcome::Admitted(1));
    assert_eq!(audit.actions(), vec![AuditAction::Admit]);
    assert_eq!(scheduler.cooldown().as_millis(), 4000);
}

#[test]
fn test_build_scheduler_rejects_invalid_config() {
    let mut cfg = SchedulerConfig::default();
    cfg.default_mode = "missing".to_string();
    let clock = ManualClock::new(0);
    let result = build_scheduler(
        &cfg,
        SequentialCaseSource::new("case"),
        InMemoryCaseRegistry::new(),
        clock.clone(),
        ManualTimer::new(clock),
        RecordingNotifier::new(),
    );
    assert!(matches!(result, Err(SchedulerError::Config(_))));
}

#[test]
fn test_build_scheduler_from_json_without_audit() {
    let clock = ManualClock::new(0);
    let built = build_scheduler_from_json(
        r#"{ "arrival": { "cooldown_ms": -10, "audit_capacity": 0 } }"#,
        SequentialCaseSource::new("case"),
        InMemoryCaseRegistry::new(),
        clock.clone(),
        ManualTimer::new(clock),
        RecordingNotifier::new(),
    )
    .unwrap();
    assert!(built.audit.is_none());
    assert!(built.scheduler.cooldown().is_zero());
}

#[test]
fn test_build_scheduler_from_json_reports_context() {
    let clock = ManualClock::new(0);
    let err = build_scheduler_from_json(
        "{ broken",
        SequentialCaseSource::new("case"),
        InMemoryCaseRegistry::new(),
        clock.clone(),
        ManualTimer::new(clock),
        RecordingNotifier::new(),
    )
    .err()
    .unwrap();
    assert!(format!("{err:#}").contains("loading arrival scheduler configuration"));
}
