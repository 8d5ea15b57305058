//! Active-set change notifications.

use crate::core::Case;
use crate::util::serde::CaseId;

/// Fire-and-forget sink invoked after the scheduler trims the active set.
pub trait Notifier {
    /// The active set changed; `selected` is the case now in focus.
    fn on_active_set_changed(&mut self, cases: &[Case], selected: Option<CaseId>);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn on_active_set_changed(&mut self, cases: &[Case], selected: Option<CaseId>) {
        tracing::info!(
            active = cases.len(),
            selected = ?selected,
            "active case set changed"
        );
    }
}
