pub mod bounds;
pub mod config;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use bounds::{BoundsSnapshot, BoundsTracker, DecayEnvelope, HardRange, SoftEnvelope};
