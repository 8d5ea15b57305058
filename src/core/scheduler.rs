//! Single-occupancy arrival scheduler with cooldown.
//!
//! The scheduler decides when a [`CaseSource`] may admit a new case. At most
//! one case is active at a time, and after every resolution a cooldown must
//! elapse before the next admission. Blocked admissions are retried by a
//! single deferred timer; there is no polling.
//!
//! ```text
//!            request_admission (cooldown pending)
//!   Idle ───────────────────────────────────────────► CooldownWaiting
//!    │  ▲                                                   │
//!    │  └──────────── produce() returned ──────┐            │ timer fired
//!    │ request_admission (cooldown elapsed)    │            ▼
//!    └──────────────────────────────────────► Admitting ◄──┘
//! ```
//!
//! Every entry point takes `&mut self` and runs to completion, so the only
//! ordering hazard is re-entry through lifecycle events. That is handled by
//! cancelling the previous timer before arming a new one and by ignoring
//! fired handles that are no longer pending.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::{CaseRegistry, CaseSource, Notifier, SchedulerError, Timer};
use crate::util::clock::{duration_ms, Clock};
use crate::util::serde::{CaseId, TimerHandle};

/// Admission state of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerState {
    /// Nothing in flight.
    Idle,
    /// A retry timer is armed for the cooldown deadline.
    CooldownWaiting,
    /// The case source is being invoked.
    Admitting,
}

/// Result of an admission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionOutcome {
    /// A case is already active; nothing was done.
    Occupied,
    /// Cooldown still running; a retry timer was armed.
    Deferred {
        /// Handle of the armed retry.
        handle: TimerHandle,
        /// Delay until the retry fires.
        delay_ms: u64,
    },
    /// The source admitted a new case.
    Admitted(CaseId),
    /// The source was invoked but produced nothing.
    Declined,
}

/// Counters describing scheduler activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Cases admitted from the source.
    pub admissions: u64,
    /// Admission attempts deferred by cooldown.
    pub deferrals: u64,
    /// Source invocations that produced nothing.
    pub declined: u64,
    /// Retry timers armed.
    pub timers_armed: u64,
    /// Retry timers cancelled before firing.
    pub timers_cancelled: u64,
    /// Fired timers ignored because they were no longer pending.
    pub stale_timer_fires: u64,
    /// Cases resolved.
    pub resolutions: u64,
    /// Extra cases dropped during reconciliation.
    pub cases_truncated: u64,
    /// Notifier invocations.
    pub notifications: u64,
}

/// Read-only view of scheduler state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStatus {
    /// Current state machine state.
    pub state: SchedulerState,
    /// Cooldown deadline on the scheduler clock, if one was ever set.
    pub cooldown_deadline_ms: Option<u64>,
    /// Time left until the deadline (zero when elapsed or unset).
    pub cooldown_remaining_ms: u64,
    /// Pending retry timer.
    pub pending_timer: Option<TimerHandle>,
    /// Number of active cases.
    pub active_cases: usize,
    /// Selected case.
    pub selected: Option<CaseId>,
    /// Activity counters.
    pub stats: SchedulerStats,
}

/// Arrival scheduler composed over its collaborators.
///
/// - `S`: case source
/// - `R`: case registry
/// - `C`: clock
/// - `T`: timer service
/// - `N`: notifier
pub struct ArrivalScheduler<S, R, C, T, N> {
    cooldown: Duration,
    cooldown_deadline_ms: Option<u64>,
    pending: Option<TimerHandle>,
    state: SchedulerState,
    source: S,
    registry: R,
    clock: C,
    timer: T,
    notifier: N,
    audit: Option<Box<dyn AuditSink>>,
    stats: SchedulerStats,
}

impl<S, R, C, T, N> ArrivalScheduler<S, R, C, T, N>
where
    S: CaseSource,
    R: CaseRegistry,
    C: Clock,
    T: Timer,
    N: Notifier,
{
    /// Create a scheduler with an empty cooldown and no pending timer.
    pub fn new(cooldown: Duration, source: S, registry: R, clock: C, timer: T, notifier: N) -> Self {
        Self {
            cooldown,
            cooldown_deadline_ms: None,
            pending: None,
            state: SchedulerState::Idle,
            source,
            registry,
            clock,
            timer,
            notifier,
            audit: None,
            stats: SchedulerStats::default(),
        }
    }

    /// Attach an audit sink.
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Consider admitting a new case.
    ///
    /// Safe to call at any time: it is a no-op while a case is active, arms
    /// (or re-arms) the single retry timer while the cooldown runs, and
    /// invokes the source otherwise.
    pub fn request_admission(&mut self) -> Result<AdmissionOutcome, SchedulerError> {
        if !self.registry.is_empty() {
            tracing::debug!(active = self.registry.len(), "admission skipped: case active");
            return Ok(AdmissionOutcome::Occupied);
        }

        let now = self.clock.now_ms();
        if let Some(deadline) = self.cooldown_deadline_ms {
            if now < deadline {
                let delay_ms = deadline - now;
                let handle = self.arm_retry(Duration::from_millis(delay_ms));
                self.state = SchedulerState::CooldownWaiting;
                self.stats.deferrals += 1;
                self.record(None, AuditAction::Defer, now, Some(format!("retry in {delay_ms}ms")));
                tracing::debug!(delay_ms, %handle, "admission deferred by cooldown");
                return Ok(AdmissionOutcome::Deferred { handle, delay_ms });
            }
        }

        // Any armed retry is redundant once we admit.
        self.cancel_pending();

        self.state = SchedulerState::Admitting;
        let produced = self.source.produce(&mut self.registry, now);
        self.state = SchedulerState::Idle;

        match produced? {
            Some(id) => {
                self.stats.admissions += 1;
                self.record(Some(id), AuditAction::Admit, now, None);
                tracing::info!(case_id = id, "case admitted");
                self.reconcile(now);
                Ok(AdmissionOutcome::Admitted(id))
            }
            None => {
                self.stats.declined += 1;
                self.record(None, AuditAction::Decline, now, None);
                tracing::debug!("case source declined to produce");
                Ok(AdmissionOutcome::Declined)
            }
        }
    }

    /// A case finished, successfully or not.
    ///
    /// Restarts the cooldown, runs the registry's resolution routine,
    /// restores single occupancy and, if nothing is active, asks for the next
    /// admission (which the fresh cooldown will defer).
    pub fn on_case_resolved(&mut self, case_id: CaseId) -> Result<AdmissionOutcome, SchedulerError> {
        let now = self.clock.now_ms();
        let deadline = now.saturating_add(duration_ms(self.cooldown));
        self.cooldown_deadline_ms = Some(deadline);
        self.stats.resolutions += 1;
        tracing::info!(case_id, cooldown_deadline_ms = deadline, "case resolved");

        self.registry.resolve(case_id)?;
        self.record(Some(case_id), AuditAction::Resolve, now, None);

        self.reconcile(now);

        if self.registry.is_empty() {
            return self.request_admission();
        }
        Ok(AdmissionOutcome::Occupied)
    }

    /// Take over arrival timing after the engine's own startup ran.
    ///
    /// Collapses any startup queue to its first case, stops the source's
    /// periodic arrivals and, when nothing is active, requests admission.
    /// Repeated calls are harmless.
    pub fn on_system_start(&mut self) -> Result<AdmissionOutcome, SchedulerError> {
        let now = self.clock.now_ms();
        self.record(None, AuditAction::Start, now, None);
        tracing::info!(active = self.registry.len(), "arrival scheduler starting");

        self.reconcile(now);
        self.source.stop_periodic_arrivals();

        if self.registry.is_empty() {
            return self.request_admission();
        }
        Ok(AdmissionOutcome::Occupied)
    }

    /// Deferred-retry callback. Stale handles are ignored and return `None`.
    pub fn on_timer_fired(
        &mut self,
        handle: TimerHandle,
    ) -> Result<Option<AdmissionOutcome>, SchedulerError> {
        if self.pending != Some(handle) {
            self.stats.stale_timer_fires += 1;
            tracing::debug!(%handle, pending = ?self.pending, "ignoring stale timer");
            return Ok(None);
        }
        self.pending = None;
        if self.state == SchedulerState::CooldownWaiting {
            self.state = SchedulerState::Idle;
        }
        let now = self.clock.now_ms();
        self.record(None, AuditAction::TimerFired, now, Some(handle.to_string()));
        self.request_admission().map(Some)
    }

    /// Snapshot of the scheduler state.
    pub fn status(&self) -> SchedulerStatus {
        let now = self.clock.now_ms();
        SchedulerStatus {
            state: self.state,
            cooldown_deadline_ms: self.cooldown_deadline_ms,
            cooldown_remaining_ms: self
                .cooldown_deadline_ms
                .map_or(0, |d| d.saturating_sub(now)),
            pending_timer: self.pending,
            active_cases: self.registry.len(),
            selected: self.registry.selected(),
            stats: self.stats.clone(),
        }
    }

    /// Current state machine state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Configured cooldown.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Registry view.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable registry access for the embedding engine.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Case source view.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Restore the single-occupancy invariant. Returns the number of dropped
    /// cases.
    fn reconcile(&mut self, now: u64) -> usize {
        if self.registry.len() <= 1 {
            return 0;
        }
        let dropped = self.registry.truncate_to_first();
        let survivor = self.registry.active_cases().first().map(|c| c.id);
        self.registry.select(survivor);

        let dropped_ids: Vec<CaseId> = dropped.iter().map(|c| c.id).collect();
        tracing::warn!(
            survivor = ?survivor,
            dropped = ?dropped_ids,
            "multiple active cases; keeping only the first"
        );
        self.stats.cases_truncated += dropped.len() as u64;
        self.record(
            survivor,
            AuditAction::Truncate,
            now,
            Some(format!("dropped {dropped_ids:?}")),
        );

        self.notifier
            .on_active_set_changed(self.registry.active_cases(), survivor);
        self.stats.notifications += 1;
        dropped.len()
    }

    /// Cancel-before-arm: at most one retry timer is ever live.
    fn arm_retry(&mut self, delay: Duration) -> TimerHandle {
        self.cancel_pending();
        let handle = self.timer.schedule(delay);
        self.pending = Some(handle);
        self.stats.timers_armed += 1;
        handle
    }

    fn cancel_pending(&mut self) {
        let Some(prev) = self.pending.take() else {
            return;
        };
        if self.timer.cancel(prev) {
            self.stats.timers_cancelled += 1;
            tracing::debug!(handle = %prev, "cancelled pending retry");
        } else {
            tracing::debug!(handle = %prev, "pending retry already fired");
        }
    }

    fn record(&mut self, case_id: Option<CaseId>, action: AuditAction, at_ms: u64, detail: Option<String>) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(case_id, action, at_ms, detail));
        }
    }
}
