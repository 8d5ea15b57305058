//! Shared identifier types used across the scheduler and its collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a case admitted into the system.
pub type CaseId = u64;

/// Opaque handle returned by a [`Timer`](crate::core::Timer) when a deferred
/// retry is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}
