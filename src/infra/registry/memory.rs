//! In-memory case registry.

use crate::core::{Case, CaseRegistry, SchedulerError};
use crate::util::serde::CaseId;

/// Vector-backed registry keeping cases in admission order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseRegistry {
    cases: Vec<Case>,
    selected: Option<CaseId>,
    resolved: Vec<CaseId>,
}

impl InMemoryCaseRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with `cases`, selecting the first.
    pub fn with_cases(cases: Vec<Case>) -> Self {
        let selected = cases.first().map(|c| c.id);
        Self {
            cases,
            selected,
            resolved: Vec::new(),
        }
    }

    /// Ids resolved so far, in resolution order.
    pub fn resolved(&self) -> &[CaseId] {
        &self.resolved
    }

    /// Look up an active case.
    pub fn get(&self, id: CaseId) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }
}

impl CaseRegistry for InMemoryCaseRegistry {
    fn len(&self) -> usize {
        self.cases.len()
    }

    fn active_cases(&self) -> &[Case] {
        &self.cases
    }

    fn push(&mut self, case: Case) {
        if self.selected.is_none() {
            self.selected = Some(case.id);
        }
        self.cases.push(case);
    }

    fn truncate_to_first(&mut self) -> Vec<Case> {
        if self.cases.len() <= 1 {
            return Vec::new();
        }
        let dropped = self.cases.split_off(1);
        if let Some(sel) = self.selected {
            if dropped.iter().any(|c| c.id == sel) {
                self.selected = self.cases.first().map(|c| c.id);
            }
        }
        dropped
    }

    fn selected(&self) -> Option<CaseId> {
        self.selected
    }

    fn select(&mut self, id: Option<CaseId>) {
        self.selected = id;
    }

    fn resolve(&mut self, id: CaseId) -> Result<(), SchedulerError> {
        let pos = self
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or(SchedulerError::UnknownCase(id))?;
        self.cases.remove(pos);
        if self.selected == Some(id) {
            self.selected = self.cases.first().map(|c| c.id);
        }
        self.resolved.push(id);
        Ok(())
    }
}
