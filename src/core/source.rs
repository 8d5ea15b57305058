//! Case source abstraction.

use crate::core::{CaseRegistry, SchedulerError};
use crate::util::serde::CaseId;

/// Factory that admits new cases into a registry.
///
/// The scheduler decides *when* this is invoked; the source decides *what*
/// the case is. Failures are propagated to the scheduler's caller untouched.
pub trait CaseSource {
    /// Append exactly one new case to `registry`, returning its id, or do
    /// nothing and return `None` when upstream conditions are unmet.
    fn produce<R: CaseRegistry>(
        &mut self,
        registry: &mut R,
        now_ms: u64,
    ) -> Result<Option<CaseId>, SchedulerError>;

    /// Stop any periodic arrival timer the source armed on its own. Called
    /// once the scheduler takes over arrival timing.
    fn stop_periodic_arrivals(&mut self) {}
}
