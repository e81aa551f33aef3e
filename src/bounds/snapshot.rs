use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Point-in-time view of a tracker, for display or hand-off to the host loop.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsSnapshot {
    pub initialized: bool,
    pub lower: f32,
    pub upper: f32,
    pub range: f32,
    pub normalized: f32,
}

impl Display for BoundsSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !self.initialized {
            return write!(f, "uninitialized");
        }
        write!(
            f,
            "lower={:.4}, upper={:.4}, range={:.4}, norm={:.4}",
            self.lower, self.upper, self.range, self.normalized
        )
    }
}
