//! Tests for configuration validation

use std::collections::HashMap;
use std::time::Duration;

use prometheus_arrival_scheduler::config::{ArrivalConfig, ModeProfile, SchedulerConfig};

#[test]
fn test_default_config_is_valid() {
    let cfg = SchedulerConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.default_mode, "training");
    assert_eq!(cfg.arrival.effective_cooldown(), Duration::from_millis(4000));
}

#[test]
fn test_training_profile() {
    let cfg = SchedulerConfig::default();
    let profile = cfg.active_profile().unwrap();
    assert_eq!(profile.deterioration_multiplier, 0.35);
    assert_eq!(profile.penalty_multiplier, 0.25);
}

#[test]
fn test_negative_cooldown_is_clamped() {
    let arrival = ArrivalConfig {
        cooldown_ms: -250.0,
        audit_capacity: 0,
    };
    assert_eq!(arrival.effective_cooldown(), Duration::ZERO);
}

#[test]
fn test_non_finite_cooldown_is_clamped() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let arrival = ArrivalConfig {
            cooldown_ms: value,
            audit_capacity: 0,
        };
        assert_eq!(arrival.effective_cooldown(), Duration::ZERO);
    }
}

#[test]
fn test_invalid_profile_multiplier() {
    let mut cfg = SchedulerConfig::default();
    cfg.modes.insert(
        "broken".to_string(),
        ModeProfile {
            deterioration_multiplier: -1.0,
            penalty_multiplier: 0.5,
        },
    );
    assert!(cfg.validate().is_err());
}

#[test]
fn test_missing_default_mode() {
    let mut cfg = SchedulerConfig::default();
    cfg.default_mode = "expert".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_empty_modes() {
    let cfg = SchedulerConfig {
        modes: HashMap::new(),
        ..SchedulerConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_scheduler_config_from_json() {
    let json = r#"{
        "arrival": { "cooldown_ms": 1500, "audit_capacity": 16 },
        "default_mode": "standard",
        "modes": {
            "standard": { "deterioration_multiplier": 1.0, "penalty_multiplier": 1.0 },
            "training": { "deterioration_multiplier": 0.35, "penalty_multiplier": 0.25 }
        }
    }"#;

    let cfg = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.arrival.effective_cooldown(), Duration::from_millis(1500));
    assert_eq!(cfg.arrival.audit_capacity, 16);
    assert_eq!(cfg.active_profile().unwrap().penalty_multiplier, 1.0);
}

#[test]
fn test_scheduler_config_from_json_defaults() {
    let cfg = SchedulerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SchedulerConfig::default());
}

#[test]
fn test_scheduler_config_from_json_parse_error() {
    let err = SchedulerConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn test_scheduler_config_from_lookup() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ARRIVAL_COOLDOWN_MS", "2500"),
        ("ARRIVAL_AUDIT_CAPACITY", "8"),
    ]);
    let cfg = SchedulerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(cfg.arrival.cooldown_ms, 2500.0);
    assert_eq!(cfg.arrival.audit_capacity, 8);
    assert_eq!(cfg.default_mode, "training");
}

#[test]
fn test_scheduler_config_from_lookup_rejects_garbage() {
    let cfg = SchedulerConfig::from_lookup(|k| {
        (k == "ARRIVAL_AUDIT_CAPACITY").then(|| "lots".to_string())
    });
    assert!(cfg.is_err());
}
