//! Error types for scheduler operations.

use thiserror::Error;

use crate::util::serde::CaseId;

/// Errors produced by scheduler components.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Configuration rejected during validation.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// The resolution routine was asked about a case it does not hold.
    #[error("unknown case: {0}")]
    UnknownCase(CaseId),
    /// A case source or registry failed; never retried by the scheduler.
    #[error("upstream failure: {0}")]
    Upstream(String),
    /// The runtime event queue feeding the scheduler has shut down.
    #[error("arrival driver closed")]
    DriverClosed,
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
