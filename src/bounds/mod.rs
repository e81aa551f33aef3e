mod bounds_tracker;
mod decay_envelope;
mod hard_range;
mod policy;
mod snapshot;
mod soft_envelope;

pub use bounds_tracker::BoundsTracker;
pub use decay_envelope::DecayEnvelope;
pub use hard_range::HardRange;
pub use policy::{DecayPolicy, GrowthPolicy, RateMode};
pub use snapshot::BoundsSnapshot;
pub use soft_envelope::SoftEnvelope;
