//! Clock backed by tokio's time driver.

use tokio::time::Instant;

use crate::util::clock::{duration_ms, Clock};

/// Monotonic clock measured from its creation on tokio's timeline.
///
/// Follows `tokio::time::pause`/`advance`, so paused-time tests see the same
/// instants as [`TokioTimer`](crate::runtime::TokioTimer).
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    /// Create a clock whose zero is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> u64 {
        duration_ms(self.origin.elapsed())
    }
}
