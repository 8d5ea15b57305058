//! The unit of work admitted by the scheduler.

use serde::{Deserialize, Serialize};

use crate::util::serde::CaseId;

/// A case held in the active set. Domain content lives with the embedding
/// engine; the scheduler only needs identity and admission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique case identifier.
    pub id: CaseId,
    /// Human-readable label supplied by the case source.
    pub label: String,
    /// Scheduler clock time at admission, in milliseconds.
    pub admitted_at_ms: u64,
}

impl Case {
    /// Build a case record.
    pub fn new(id: CaseId, label: impl Into<String>, admitted_at_ms: u64) -> Self {
        Self {
            id,
            label: label.into(),
            admitted_at_ms,
        }
    }
}
