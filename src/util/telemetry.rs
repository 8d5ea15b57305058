//! Log output for the scheduler's `tracing` events.

/// Install a `fmt` subscriber filtered by `RUST_LOG`, so admission, deferral
/// and truncation events are visible (for example
/// `RUST_LOG=prometheus_arrival_scheduler=debug`).
///
/// Does nothing when the embedding engine already installed a subscriber,
/// so it is safe to call from every entry point and test.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .try_init();
}
