//! # Prometheus Arrival Scheduler
//!
//! Single-occupancy arrival scheduling with a cooldown between cases.
//!
//! A simulation engine produces units of work ("cases") and resolves them as
//! the user works through them. This crate decides *when* the engine may
//! admit the next one:
//!
//! - **Single occupancy**: a new case is only admitted while none is active.
//! - **Cooldown**: after every resolution, admission pauses for a fixed
//!   duration.
//! - **Event-driven retry**: a blocked admission arms exactly one deferred
//!   timer; there is no polling.
//! - **Reconciliation**: if the engine ever ends up with more than one
//!   active case, the scheduler keeps the first and notifies listeners.
//!
//! ## Composition
//!
//! [`core::ArrivalScheduler`] is generic over five collaborators, each behind
//! a trait: [`core::CaseSource`], [`core::CaseRegistry`], [`util::Clock`],
//! [`core::Timer`] and [`core::Notifier`]. In-memory and manual
//! implementations live in [`infra`]; tokio-backed ones in `runtime`.
//!
//! ```rust,ignore
//! use prometheus_arrival_scheduler::builders::build_scheduler;
//! use prometheus_arrival_scheduler::config::SchedulerConfig;
//! use prometheus_arrival_scheduler::infra::{InMemoryCaseRegistry, SequentialCaseSource};
//! use prometheus_arrival_scheduler::runtime::{
//!     ArrivalDriver, ArrivalHandle, ChannelNotifier, TokioClock, TokioSpawner, TokioTimer,
//! };
//!
//! let cfg = SchedulerConfig::from_env()?;
//! let (handle, events) = ArrivalHandle::channel();
//! let (notifier, _changes) = ChannelNotifier::channel();
//! let built = build_scheduler(
//!     &cfg,
//!     SequentialCaseSource::new("patient"),
//!     InMemoryCaseRegistry::new(),
//!     TokioClock::new(),
//!     TokioTimer::new(TokioSpawner::current(), &handle),
//!     notifier,
//! )?;
//! tokio::spawn(ArrivalDriver::new(built.scheduler, events).run());
//!
//! handle.start()?;
//! handle.case_resolved(1)?;
//! ```
//!
//! For complete scenarios, see `tests/arrival_scenarios_test.rs`.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions and the arrival state machine.
pub mod core;
/// Configuration models for cooldown and difficulty profiles.
pub mod config;
/// Builders to construct a scheduler from configuration.
pub mod builders;
/// Infrastructure adapters: in-memory registry, sources, timers, notifiers.
pub mod infra;
/// Tokio runtime adapters and API surface.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
