//! Tokio runtime adapters: spawner, clock, timer, notifier and the event
//! driver that owns the scheduler.

pub mod api;
pub mod driver;
pub mod tokio_clock;
pub mod tokio_notifier;
pub mod tokio_spawner;
pub mod tokio_timer;

pub use api::{health, status_response, Health, StatusResponse};
pub use driver::{ArrivalDriver, ArrivalEvent, ArrivalHandle};
pub use tokio_clock::TokioClock;
pub use tokio_notifier::ChannelNotifier;
pub use tokio_spawner::TokioSpawner;
pub use tokio_timer::TokioTimer;
