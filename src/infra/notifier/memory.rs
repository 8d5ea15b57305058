//! In-memory notifier that records every notification.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::{Case, Notifier};
use crate::util::clock::now_ms;
use crate::util::serde::CaseId;

/// Recorded active-set change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Active cases after the change.
    pub cases: Vec<Case>,
    /// Selected case after the change.
    pub selected: Option<CaseId>,
    /// Wall-clock timestamp milliseconds.
    pub created_at_ms: u64,
}

/// Notifier keeping a shared log. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().clone()
    }

    /// Number of notifications received.
    pub fn count(&self) -> usize {
        self.log.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn on_active_set_changed(&mut self, cases: &[Case], selected: Option<CaseId>) {
        self.log.lock().push(Notification {
            cases: cases.to_vec(),
            selected,
            created_at_ms: now_ms(),
        });
    }
}
