//! Audit sink implementations.
//!
//! Records the scheduler's lifecycle decisions so that admission ordering can
//! be inspected after the fact.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::now_ms;
use crate::util::serde::CaseId;

/// Scheduler action captured by an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// System start was processed.
    Start,
    /// A case was admitted from the source.
    Admit,
    /// Admission was deferred until the cooldown deadline.
    Defer,
    /// The source declined to produce a case.
    Decline,
    /// A case was resolved and the cooldown restarted.
    Resolve,
    /// Extra active cases were dropped to restore single occupancy.
    Truncate,
    /// A pending retry timer fired.
    TimerFired,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Admit => "admit",
            Self::Defer => "defer",
            Self::Decline => "decline",
            Self::Resolve => "resolve",
            Self::Truncate => "truncate",
            Self::TimerFired => "timer_fired",
        };
        f.write_str(s)
    }
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related case, when the action concerns one.
    pub case_id: Option<CaseId>,
    /// Action taken.
    pub action: AuditAction,
    /// Scheduler clock time of the decision (milliseconds).
    pub at_ms: u64,
    /// Wall-clock timestamp milliseconds.
    pub created_at_ms: u64,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
///
/// Bounded ring buffer; clones share the same buffer so callers can keep a
/// reader while the scheduler owns the writer.
#[derive(Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events.min(1024)))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Actions in recording order.
    pub fn actions(&self) -> Vec<AuditAction> {
        self.events.lock().iter().map(|e| e.action).collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    case_id: Option<CaseId>,
    action: AuditAction,
    at_ms: u64,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        case_id,
        action,
        at_ms,
        created_at_ms: now_ms(),
        detail,
    }
}
