//! Arrival scheduler configuration structures.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default pause between a resolution and the next admission.
pub const DEFAULT_COOLDOWN_MS: f64 = 4000.0;
/// Default capacity of the in-memory audit trail.
pub const DEFAULT_AUDIT_CAPACITY: usize = 256;
/// Mode selected when none is configured.
pub const DEFAULT_MODE: &str = "training";

/// Cooldown and audit settings for the arrival scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalConfig {
    /// Minimum delay after a resolution before another case may be admitted.
    /// Negative or non-finite values are clamped to zero.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: f64,
    /// Maximum retained audit events; zero disables auditing.
    #[serde(default = "default_audit_capacity")]
    pub audit_capacity: usize,
}

/// Difficulty multipliers the embedding engine applies in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Scale applied to how fast an active case deteriorates.
    pub deterioration_multiplier: f64,
    /// Scale applied to penalties for wrong actions.
    pub penalty_multiplier: f64,
}

/// Root scheduler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Arrival timing.
    #[serde(default)]
    pub arrival: ArrivalConfig,
    /// Mode whose profile is active at startup.
    #[serde(default = "default_mode")]
    pub default_mode: String,
    /// Map of mode name to difficulty profile.
    #[serde(default = "default_modes")]
    pub modes: HashMap<String, ModeProfile>,
}

fn default_cooldown_ms() -> f64 {
    DEFAULT_COOLDOWN_MS
}

fn default_audit_capacity() -> usize {
    DEFAULT_AUDIT_CAPACITY
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

fn default_modes() -> HashMap<String, ModeProfile> {
    HashMap::from([(DEFAULT_MODE.to_string(), ModeProfile::training())])
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }
}

impl ArrivalConfig {
    /// Cooldown as a duration, clamping invalid values to zero.
    pub fn effective_cooldown(&self) -> Duration {
        if !self.cooldown_ms.is_finite() || self.cooldown_ms < 0.0 {
            tracing::warn!(
                cooldown_ms = self.cooldown_ms,
                "invalid cooldown duration, clamping to zero"
            );
            return Duration::ZERO;
        }
        Duration::from_millis(self.cooldown_ms.round() as u64)
    }
}

impl ModeProfile {
    /// Gentle profile for learners: slow deterioration, light penalties.
    pub const fn training() -> Self {
        Self {
            deterioration_multiplier: 0.35,
            penalty_multiplier: 0.25,
        }
    }

    /// Validate multiplier values.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("deterioration_multiplier", self.deterioration_multiplier),
            ("penalty_multiplier", self.penalty_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a finite, non-negative number"));
            }
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            arrival: ArrivalConfig::default(),
            default_mode: default_mode(),
            modes: default_modes(),
        }
    }
}

impl SchedulerConfig {
    /// Validate profiles and ensure the default mode exists.
    ///
    /// Cooldown values are clamped, not rejected; see
    /// [`ArrivalConfig::effective_cooldown`].
    pub fn validate(&self) -> Result<(), String> {
        if self.modes.is_empty() {
            return Err("at least one mode must be defined".into());
        }
        for (name, profile) in &self.modes {
            profile
                .validate()
                .map_err(|e| format!("mode `{name}` invalid: {e}"))?;
        }
        if !self.modes.contains_key(&self.default_mode) {
            return Err(format!("default mode `{}` is not defined", self.default_mode));
        }
        Ok(())
    }

    /// Profile for the default mode.
    pub fn active_profile(&self) -> Option<&ModeProfile> {
        self.modes.get(&self.default_mode)
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: SchedulerConfig =
            serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment, loading a `.env`
    /// file first when present.
    ///
    /// Recognized keys: `ARRIVAL_COOLDOWN_MS`, `ARRIVAL_AUDIT_CAPACITY`,
    /// `ARRIVAL_DEFAULT_MODE`.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup over the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup("ARRIVAL_COOLDOWN_MS") {
            cfg.arrival.cooldown_ms = raw
                .trim()
                .parse()
                .map_err(|e| format!("ARRIVAL_COOLDOWN_MS: {e}"))?;
        }
        if let Some(raw) = lookup("ARRIVAL_AUDIT_CAPACITY") {
            cfg.arrival.audit_capacity = raw
                .trim()
                .parse()
                .map_err(|e| format!("ARRIVAL_AUDIT_CAPACITY: {e}"))?;
        }
        if let Some(raw) = lookup("ARRIVAL_DEFAULT_MODE") {
            cfg.default_mode = raw.trim().to_string();
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
