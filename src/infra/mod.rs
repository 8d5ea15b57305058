//! Infrastructure adapters for registries, sources, timers and notifiers.

pub mod notifier;
pub mod registry;
pub mod source;
pub mod timer;

pub use notifier::RecordingNotifier;
pub use registry::InMemoryCaseRegistry;
pub use source::SequentialCaseSource;
pub use timer::ManualTimer;
