//! Core scheduling abstractions and the arrival state machine.

pub mod audit;
pub mod case;
pub mod error;
pub mod notifier;
pub mod registry;
pub mod scheduler;
pub mod source;
pub mod timer;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use case::Case;
pub use error::{AppResult, SchedulerError};
pub use notifier::{Notifier, TracingNotifier};
pub use registry::CaseRegistry;
pub use scheduler::{
    AdmissionOutcome, ArrivalScheduler, SchedulerState, SchedulerStats, SchedulerStatus,
};
pub use source::CaseSource;
pub use timer::{Spawn, Timer};
