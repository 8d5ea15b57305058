//! Configuration models for the arrival scheduler and difficulty profiles.

pub mod arrival;

pub use arrival::{ArrivalConfig, ModeProfile, SchedulerConfig};
