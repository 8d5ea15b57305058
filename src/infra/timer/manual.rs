//! Deterministic timer driven by a [`ManualClock`].
//!
//! Nothing fires on its own: the caller advances the clock, collects due
//! handles with [`ManualTimer::take_due`] and hands each one to
//! [`ArrivalScheduler::on_timer_fired`](crate::core::ArrivalScheduler::on_timer_fired).

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::core::Timer;
use crate::util::clock::{duration_ms, Clock, ManualClock};
use crate::util::serde::TimerHandle;

/// Operation recorded by a [`ManualTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    /// A timer was armed to fire at `due_ms`.
    Armed {
        /// Armed handle.
        handle: TimerHandle,
        /// Absolute due time.
        due_ms: u64,
    },
    /// A live timer was cancelled.
    Cancelled(TimerHandle),
    /// A timer came due and was handed out.
    Fired(TimerHandle),
}

/// Most recent operations kept by [`ManualTimer::history`].
pub const HISTORY_CAPACITY: usize = 4096;

#[derive(Debug, Default)]
struct TimerState {
    next_id: u64,
    armed: BTreeMap<TimerHandle, u64>,
    history: VecDeque<TimerOp>,
    armed_total: u64,
    cancelled_total: u64,
    max_live: usize,
}

impl TimerState {
    fn record(&mut self, op: TimerOp) {
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(op);
    }
}

/// Virtual-time timer. Clones share state.
#[derive(Debug, Clone)]
pub struct ManualTimer {
    clock: ManualClock,
    state: Arc<Mutex<TimerState>>,
}

impl ManualTimer {
    /// Create a timer reading due times from `clock`.
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            state: Arc::new(Mutex::new(TimerState::default())),
        }
    }

    /// Remove and return every live timer due at the current clock time,
    /// earliest first.
    pub fn take_due(&self) -> Vec<TimerHandle> {
        let now = self.clock.now_ms();
        let mut state = self.state.lock();
        let mut due: Vec<(u64, TimerHandle)> = state
            .armed
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&h, &at)| (at, h))
            .collect();
        due.sort_unstable();
        for (_, handle) in &due {
            state.armed.remove(handle);
            state.record(TimerOp::Fired(*handle));
        }
        due.into_iter().map(|(_, h)| h).collect()
    }

    /// Due time of the earliest live timer.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.state.lock().armed.values().min().copied()
    }

    /// Live (armed, not fired, not cancelled) timers.
    pub fn live(&self) -> usize {
        self.state.lock().armed.len()
    }

    /// Highest number of simultaneously live timers observed.
    pub fn max_live(&self) -> usize {
        self.state.lock().max_live
    }

    /// Timers armed so far.
    pub fn armed_total(&self) -> u64 {
        self.state.lock().armed_total
    }

    /// Timers cancelled so far.
    pub fn cancelled_total(&self) -> u64 {
        self.state.lock().cancelled_total
    }

    /// The last [`HISTORY_CAPACITY`] operations, oldest first.
    pub fn history(&self) -> Vec<TimerOp> {
        self.state.lock().history.iter().copied().collect()
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let due_ms = self.clock.now_ms().saturating_add(duration_ms(delay));
        let mut state = self.state.lock();
        state.next_id += 1;
        let handle = TimerHandle(state.next_id);
        state.armed.insert(handle, due_ms);
        state.record(TimerOp::Armed { handle, due_ms });
        state.armed_total += 1;
        state.max_live = state.max_live.max(state.armed.len());
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let mut state = self.state.lock();
        if state.armed.remove(&handle).is_none() {
            return false;
        }
        state.record(TimerOp::Cancelled(handle));
        state.cancelled_total += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_respects_clock() {
        let clock = ManualClock::new(0);
        let mut timer = ManualTimer::new(clock.clone());
        let a = timer.schedule(Duration::from_millis(300));
        let b = timer.schedule(Duration::from_millis(100));

        clock.set(99);
        assert!(timer.take_due().is_empty());
        clock.set(300);
        assert_eq!(timer.take_due(), vec![b, a]);
        assert_eq!(timer.live(), 0);
        assert_eq!(timer.max_live(), 2);
    }

    #[test]
    fn test_cancel_fired_handle_is_noop() {
        let clock = ManualClock::new(0);
        let mut timer = ManualTimer::new(clock.clone());
        let h = timer.schedule(Duration::ZERO);
        assert_eq!(timer.take_due(), vec![h]);
        assert!(!timer.cancel(h));
        assert_eq!(timer.cancelled_total(), 0);
        assert_eq!(
            timer.history(),
            vec![TimerOp::Armed { handle: h, due_ms: 0 }, TimerOp::Fired(h)]
        );
    }

    #[test]
    fn test_history_is_bounded() {
        let clock = ManualClock::new(0);
        let mut timer = ManualTimer::new(clock);
        let mut handles = Vec::new();
        for _ in 0..HISTORY_CAPACITY {
            let h = timer.schedule(Duration::from_millis(50));
            assert!(timer.cancel(h));
            handles.push(h);
        }
        let last = handles[handles.len() - 1];
        let history = timer.history();
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.last(), Some(&TimerOp::Cancelled(last)));
        assert_eq!(timer.armed_total(), HISTORY_CAPACITY as u64);
    }
}
