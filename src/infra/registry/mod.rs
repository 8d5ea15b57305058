//! Case registry backends.

pub mod memory;

pub use memory::InMemoryCaseRegistry;
