//! Event-queue driver for the arrival scheduler.
//!
//! The driver owns the scheduler and drains a single unbounded channel, so
//! lifecycle events and timer callbacks are processed one at a time in
//! arrival order. Nothing else touches scheduler state.

use tokio::sync::{mpsc, oneshot};

use crate::core::{
    AdmissionOutcome, ArrivalScheduler, CaseRegistry, CaseSource, Notifier, SchedulerError,
    SchedulerStatus, Timer,
};
use crate::util::clock::Clock;
use crate::util::serde::{CaseId, TimerHandle};

/// Event delivered to the driver.
#[derive(Debug)]
pub enum ArrivalEvent {
    /// Engine startup finished.
    Start,
    /// Ask for an admission check.
    RequestAdmission,
    /// A case finished.
    CaseResolved(CaseId),
    /// A retry timer fired.
    TimerFired(TimerHandle),
    /// Reply with a status snapshot.
    Status(oneshot::Sender<SchedulerStatus>),
    /// Stop the driver loop.
    Shutdown,
}

/// Cloneable sender side used by the engine and by timers.
#[derive(Debug, Clone)]
pub struct ArrivalHandle {
    tx: mpsc::UnboundedSender<ArrivalEvent>,
}

impl ArrivalHandle {
    /// Create a handle and the event receiver to hand to [`ArrivalDriver::new`].
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ArrivalEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Signal that engine startup finished.
    pub fn start(&self) -> Result<(), SchedulerError> {
        self.send(ArrivalEvent::Start)
    }

    /// Request an admission check.
    pub fn request_admission(&self) -> Result<(), SchedulerError> {
        self.send(ArrivalEvent::RequestAdmission)
    }

    /// Report a finished case.
    pub fn case_resolved(&self, case_id: CaseId) -> Result<(), SchedulerError> {
        self.send(ArrivalEvent::CaseResolved(case_id))
    }

    /// Report a fired retry timer.
    pub fn timer_fired(&self, handle: TimerHandle) -> Result<(), SchedulerError> {
        self.send(ArrivalEvent::TimerFired(handle))
    }

    /// Fetch a status snapshot once every earlier event has been processed.
    pub async fn status(&self) -> Result<SchedulerStatus, SchedulerError> {
        let (reply, rx) = oneshot::channel();
        self.send(ArrivalEvent::Status(reply))?;
        rx.await.map_err(|_| SchedulerError::DriverClosed)
    }

    /// Stop the driver after pending events.
    pub fn shutdown(&self) -> Result<(), SchedulerError> {
        self.send(ArrivalEvent::Shutdown)
    }

    /// Sender that does not keep the queue open.
    pub(crate) fn downgrade(&self) -> mpsc::WeakUnboundedSender<ArrivalEvent> {
        self.tx.downgrade()
    }

    fn send(&self, event: ArrivalEvent) -> Result<(), SchedulerError> {
        self.tx.send(event).map_err(|_| SchedulerError::DriverClosed)
    }
}

/// Owns a scheduler and feeds it events from the queue.
pub struct ArrivalDriver<S, R, C, T, N> {
    scheduler: ArrivalScheduler<S, R, C, T, N>,
    events: mpsc::UnboundedReceiver<ArrivalEvent>,
}

impl<S, R, C, T, N> ArrivalDriver<S, R, C, T, N>
where
    S: CaseSource,
    R: CaseRegistry,
    C: Clock,
    T: Timer,
    N: Notifier,
{
    /// Wrap a scheduler and its event receiver.
    pub fn new(
        scheduler: ArrivalScheduler<S, R, C, T, N>,
        events: mpsc::UnboundedReceiver<ArrivalEvent>,
    ) -> Self {
        Self { scheduler, events }
    }

    /// Process events until shutdown or until every [`ArrivalHandle`] is
    /// dropped, then hand the scheduler back.
    ///
    /// Upstream failures are not retried: the loop stops and the error is
    /// returned to whoever awaits the driver.
    pub async fn run(mut self) -> Result<ArrivalScheduler<S, R, C, T, N>, SchedulerError> {
        tracing::debug!("arrival driver started");
        while let Some(event) = self.events.recv().await {
            match self.dispatch(event) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    tracing::error!(error = %e, "arrival driver stopping on upstream failure");
                    return Err(e);
                }
            }
        }
        tracing::debug!("arrival driver stopped");
        Ok(self.scheduler)
    }

    /// Handle one event; `Ok(false)` stops the loop.
    fn dispatch(&mut self, event: ArrivalEvent) -> Result<bool, SchedulerError> {
        let outcome: Option<AdmissionOutcome> = match event {
            ArrivalEvent::Start => Some(self.scheduler.on_system_start()?),
            ArrivalEvent::RequestAdmission => Some(self.scheduler.request_admission()?),
            ArrivalEvent::CaseResolved(id) => Some(self.scheduler.on_case_resolved(id)?),
            ArrivalEvent::TimerFired(handle) => self.scheduler.on_timer_fired(handle)?,
            ArrivalEvent::Status(reply) => {
                let _ = reply.send(self.scheduler.status());
                None
            }
            ArrivalEvent::Shutdown => return Ok(false),
        };
        if let Some(outcome) = outcome {
            tracing::trace!(?outcome, "event processed");
        }
        Ok(true)
    }
}
