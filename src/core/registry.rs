//! Active case registry abstraction.

use crate::core::{Case, SchedulerError};
use crate::util::serde::CaseId;

/// Holder of the currently active cases and the selected case reference.
///
/// The scheduler only reads its size and, on overflow, trims it back to the
/// first entry. Everything else belongs to the embedding engine.
pub trait CaseRegistry {
    /// Number of active cases.
    fn len(&self) -> usize;

    /// True when no case is active.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active cases in admission order.
    fn active_cases(&self) -> &[Case];

    /// Append a case to the active set.
    fn push(&mut self, case: Case);

    /// Keep only the first active case, returning the dropped ones.
    fn truncate_to_first(&mut self) -> Vec<Case>;

    /// Currently selected case, if any.
    fn selected(&self) -> Option<CaseId>;

    /// Change the selected case.
    fn select(&mut self, id: Option<CaseId>);

    /// Resolution bookkeeping for a finished case (success or failure).
    ///
    /// This is the engine's own routine; it may leave the active set in any
    /// shape, including with extra cases admitted as a side effect.
    fn resolve(&mut self, id: CaseId) -> Result<(), SchedulerError>;
}
