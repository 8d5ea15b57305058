//! Tokio-backed retry timer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use crate::core::{Spawn, Timer};
use crate::runtime::driver::{ArrivalEvent, ArrivalHandle};
use crate::runtime::tokio_spawner::TokioSpawner;
use crate::util::serde::TimerHandle;

type LiveTimers = Arc<Mutex<HashMap<TimerHandle, oneshot::Sender<()>>>>;

/// Each armed timer is a spawned sleep that posts
/// [`ArrivalEvent::TimerFired`] to the driver's queue. Cancelling drops it
/// through a oneshot.
///
/// The timer only holds a weak sender, so it never keeps the driver's queue
/// open after the engine dropped its last [`ArrivalHandle`]. Dropping the
/// timer cancels everything still armed.
pub struct TokioTimer<S = TokioSpawner> {
    spawner: S,
    events: mpsc::WeakUnboundedSender<ArrivalEvent>,
    next_id: u64,
    live: LiveTimers,
}

impl<S: Spawn> TokioTimer<S> {
    /// Create a timer that reports fired handles to the queue behind `events`.
    pub fn new(spawner: S, events: &ArrivalHandle) -> Self {
        Self {
            spawner,
            events: events.downgrade(),
            next_id: 0,
            live: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Timers armed and neither fired nor cancelled.
    pub fn live(&self) -> usize {
        self.live.lock().len()
    }
}

impl<S: Spawn> Timer for TokioTimer<S> {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let (cancel_tx, cancel_rx) = oneshot::channel();
        self.live.lock().insert(handle, cancel_tx);

        let live = Arc::clone(&self.live);
        let events = self.events.clone();
        self.spawner.spawn(async move {
            tokio::select! {
                () = tokio::time::sleep(delay) => {
                    live.lock().remove(&handle);
                    let Some(tx) = events.upgrade() else {
                        tracing::debug!(%handle, "driver gone before timer fired");
                        return;
                    };
                    if tx.send(ArrivalEvent::TimerFired(handle)).is_err() {
                        tracing::debug!(%handle, "driver gone before timer fired");
                    }
                }
                _ = cancel_rx => {}
            }
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.live
            .lock()
            .remove(&handle)
            .is_some_and(|cancel| cancel.send(()).is_ok())
    }
}

impl<S> Drop for TokioTimer<S> {
    fn drop(&mut self) {
        for (_, cancel) in self.live.lock().drain() {
            let _ = cancel.send(());
        }
    }
}
