//! Tests for audit sink

use prometheus_arrival_scheduler::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event(Some(1), AuditAction::Admit, 250, Some("detail".to_string()));

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].case_id, Some(1));
    assert_eq!(events[0].action, AuditAction::Admit);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(Some(1), AuditAction::Admit, 0, None));
    sink.record(build_audit_event(Some(1), AuditAction::Resolve, 10, None));
    sink.record(build_audit_event(None, AuditAction::Defer, 10, None));

    let actions = sink.actions();
    assert_eq!(actions, vec![AuditAction::Resolve, AuditAction::Defer]); // First one popped
}

#[test]
fn test_audit_sink_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(4);
    let mut writer = sink.clone();
    writer.record(build_audit_event(None, AuditAction::Start, 0, None));
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn test_zero_capacity_records_nothing() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event(None, AuditAction::Start, 0, None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(Some(3), AuditAction::Truncate, 42, Some("dropped [4]".to_string()));

    assert_eq!(event.case_id, Some(3));
    assert_eq!(event.action, AuditAction::Truncate);
    assert_eq!(event.at_ms, 42);
    assert_eq!(event.detail, Some("dropped [4]".to_string()));
    assert_eq!(event.action.to_string(), "truncate");
    assert!(!event.event_id.is_empty());
    assert!(event.created_at_ms > 0);
}
