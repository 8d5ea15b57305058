//! API-facing response models.

use serde::{Deserialize, Serialize};

use crate::config::{ModeProfile, SchedulerConfig};
use crate::core::SchedulerStatus;
use crate::util::clock::duration_ms;

/// Scheduler status enriched with the active difficulty profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Active mode name.
    pub mode: String,
    /// Profile for that mode.
    pub profile: Option<ModeProfile>,
    /// Configured cooldown after clamping, in milliseconds.
    pub cooldown_ms: u64,
    /// Scheduler snapshot.
    pub scheduler: SchedulerStatus,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Combine a scheduler snapshot with configuration for reporting.
pub fn status_response(cfg: &SchedulerConfig, scheduler: SchedulerStatus) -> StatusResponse {
    StatusResponse {
        mode: cfg.default_mode.clone(),
        profile: cfg.active_profile().copied(),
        cooldown_ms: duration_ms(cfg.arrival.effective_cooldown()),
        scheduler,
    }
}

/// Return a health payload.
pub fn health() -> Health {
    Health { ok: true }
}
