//! Deferred-retry timer abstraction.

use std::future::Future;
use std::time::Duration;

use crate::util::serde::TimerHandle;

/// One-shot timer service used to arm cooldown retries.
///
/// Implementations deliver a fired handle back to the scheduler through
/// [`ArrivalScheduler::on_timer_fired`](crate::core::ArrivalScheduler::on_timer_fired),
/// on the same event queue as every other lifecycle event.
pub trait Timer {
    /// Arm a one-shot timer that fires after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;
    /// Cancel an armed timer. Returns `false` if it already fired or is
    /// unknown, in which case nothing happens.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Abstraction for spawning background futures on a runtime.
pub trait Spawn {
    /// Spawn a detached future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}
