//! Case source that mints sequentially numbered cases.

use crate::core::{Case, CaseRegistry, CaseSource, SchedulerError};
use crate::util::serde::CaseId;

/// Produces cases with ids `1, 2, 3, ...`, optionally up to a fixed total.
#[derive(Debug, Clone)]
pub struct SequentialCaseSource {
    label_prefix: String,
    next_id: CaseId,
    remaining: Option<usize>,
    produced: usize,
    periodic_arrivals: bool,
}

impl SequentialCaseSource {
    /// Unlimited source labelling cases `"{prefix}-{id}"`.
    pub fn new(label_prefix: impl Into<String>) -> Self {
        Self {
            label_prefix: label_prefix.into(),
            next_id: 1,
            remaining: None,
            produced: 0,
            periodic_arrivals: true,
        }
    }

    /// Stop producing after `total` cases; later calls are no-ops.
    pub fn with_limit(mut self, total: usize) -> Self {
        self.remaining = Some(total);
        self
    }

    /// Start numbering at `id`.
    pub fn starting_at(mut self, id: CaseId) -> Self {
        self.next_id = id;
        self
    }

    /// Number of cases produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// Whether the engine's periodic arrivals are still enabled.
    pub fn periodic_arrivals(&self) -> bool {
        self.periodic_arrivals
    }
}

impl CaseSource for SequentialCaseSource {
    fn produce<R: CaseRegistry>(
        &mut self,
        registry: &mut R,
        now_ms: u64,
    ) -> Result<Option<CaseId>, SchedulerError> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Ok(None);
            }
            *remaining -= 1;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.produced += 1;
        registry.push(Case::new(id, format!("{}-{id}", self.label_prefix), now_ms));
        Ok(Some(id))
    }

    fn stop_periodic_arrivals(&mut self) {
        if self.periodic_arrivals {
            tracing::debug!("periodic arrivals disabled");
        }
        self.periodic_arrivals = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::registry::InMemoryCaseRegistry;

    #[test]
    fn test_produces_sequential_ids() {
        let mut source = SequentialCaseSource::new("patient").starting_at(10);
        let mut registry = InMemoryCaseRegistry::new();
        assert_eq!(source.produce(&mut registry, 5).unwrap(), Some(10));
        assert_eq!(source.produce(&mut registry, 6).unwrap(), Some(11));
        assert_eq!(registry.active_cases()[0].label, "patient-10");
        assert_eq!(registry.active_cases()[1].admitted_at_ms, 6);
    }

    #[test]
    fn test_limit_makes_source_a_noop() {
        let mut source = SequentialCaseSource::new("case").with_limit(1);
        let mut registry = InMemoryCaseRegistry::new();
        assert!(source.produce(&mut registry, 0).unwrap().is_some());
        assert!(source.produce(&mut registry, 0).unwrap().is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(source.produced(), 1);
    }
}
