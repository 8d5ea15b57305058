//! Where retry-timer tasks run.

use std::future::Future;

use crate::core::Spawn;

/// Runs [`TokioTimer`](crate::runtime::TokioTimer) sleep tasks on a tokio
/// runtime, usually the one the [`ArrivalDriver`](crate::runtime::ArrivalDriver)
/// is polled on.
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: tokio::runtime::Handle,
}

impl TokioSpawner {
    /// Spawn timer tasks on the runtime behind `handle`.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Spawn timer tasks on the runtime the caller is running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
