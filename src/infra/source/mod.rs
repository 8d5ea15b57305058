//! Case source backends.

pub mod sequential;

pub use sequential::SequentialCaseSource;
