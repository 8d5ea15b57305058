//! Builders to construct an arrival scheduler from configuration.

use anyhow::Context;

use crate::config::SchedulerConfig;
use crate::core::{
    AppResult, ArrivalScheduler, CaseRegistry, CaseSource, InMemoryAuditSink, Notifier,
    SchedulerError, Timer,
};
use crate::util::clock::{duration_ms, Clock};

/// A configured scheduler plus a reader for its audit trail, if enabled.
pub struct BuiltScheduler<S, R, C, T, N> {
    /// The scheduler, ready for `on_system_start`.
    pub scheduler: ArrivalScheduler<S, R, C, T, N>,
    /// Shared view of the audit trail when `audit_capacity > 0`.
    pub audit: Option<InMemoryAuditSink>,
}

/// Build a scheduler from configuration and the supplied collaborators.
pub fn build_scheduler<S, R, C, T, N>(
    cfg: &SchedulerConfig,
    source: S,
    registry: R,
    clock: C,
    timer: T,
    notifier: N,
) -> Result<BuiltScheduler<S, R, C, T, N>, SchedulerError>
where
    S: CaseSource,
    R: CaseRegistry,
    C: Clock,
    T: Timer,
    N: Notifier,
{
    cfg.validate().map_err(SchedulerError::Config)?;

    let cooldown = cfg.arrival.effective_cooldown();
    let mut scheduler = ArrivalScheduler::new(cooldown, source, registry, clock, timer, notifier);

    let audit = if cfg.arrival.audit_capacity > 0 {
        let sink = InMemoryAuditSink::new(cfg.arrival.audit_capacity);
        scheduler = scheduler.with_audit(Box::new(sink.clone()));
        Some(sink)
    } else {
        None
    };

    tracing::debug!(
        cooldown_ms = duration_ms(cooldown),
        mode = %cfg.default_mode,
        audit = audit.is_some(),
        "arrival scheduler built"
    );
    Ok(BuiltScheduler { scheduler, audit })
}

/// Parse JSON configuration and build a scheduler in one step.
pub fn build_scheduler_from_json<S, R, C, T, N>(
    json: &str,
    source: S,
    registry: R,
    clock: C,
    timer: T,
    notifier: N,
) -> AppResult<BuiltScheduler<S, R, C, T, N>>
where
    S: CaseSource,
    R: CaseRegistry,
    C: Clock,
    T: Timer,
    N: Notifier,
{
    let cfg = SchedulerConfig::from_json_str(json)
        .map_err(anyhow::Error::msg)
        .context("loading arrival scheduler configuration")?;
    let built = build_scheduler(&cfg, source, registry, clock, timer, notifier)
        .context("building arrival scheduler")?;
    Ok(built)
}
