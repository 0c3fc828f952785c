//! Deterministic key sequences to load trees with, in tests and benchmarks

mod float;
mod sequential;
mod shuffled;

pub use float::*;
pub use sequential::*;
pub use shuffled::*;
