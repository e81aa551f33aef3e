use crate::utils::math::approach;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// How a per-update amount is applied to a bound.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RateMode {
    /// The amount is an absolute step in sample units.
    Linear,
    /// The amount is the fraction of the remaining gap removed per update.
    #[default]
    Exponential,
}

/// Narrows an envelope back toward the most recent sample.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DecayPolicy {
    pub amount: f32,
    pub mode: RateMode,
}

impl DecayPolicy {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            mode: RateMode::Exponential,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.amount > 0.0
    }

    /// Pulls `upper` down toward `value`, never below it.
    #[inline]
    pub fn decay_upper(&self, upper: f32, value: f32) -> f32 {
        let decayed = match self.mode {
            RateMode::Linear => upper - self.amount,
            RateMode::Exponential => approach(upper, value, self.amount),
        };
        decayed.max(value)
    }

    /// Pulls `lower` up toward `value`, never above it.
    #[inline]
    pub fn decay_lower(&self, lower: f32, value: f32) -> f32 {
        let decayed = match self.mode {
            RateMode::Linear => lower + self.amount,
            RateMode::Exponential => approach(lower, value, self.amount),
        };
        decayed.min(value)
    }
}

/// Widens a bound gradually toward a sample that fell outside the envelope.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    pub amount: f32,
    pub mode: RateMode,
}

impl GrowthPolicy {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            mode: RateMode::Exponential,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.amount > 0.0
    }

    /// Raises `upper` toward a higher `value`. Never overshoots `value` and
    /// never moves `upper` down.
    #[inline]
    pub fn grow_upper(&self, upper: f32, value: f32) -> f32 {
        let grown = match self.mode {
            RateMode::Linear => upper + self.amount,
            RateMode::Exponential => approach(upper, value, self.amount),
        };
        // rounding in `approach` can land an ulp outside [upper, value]
        grown.max(upper).min(value)
    }

    /// Lowers `lower` toward a smaller `value`. Never overshoots `value` and
    /// never moves `lower` up.
    #[inline]
    pub fn grow_lower(&self, lower: f32, value: f32) -> f32 {
        let grown = match self.mode {
            RateMode::Linear => lower - self.amount,
            RateMode::Exponential => approach(lower, value, self.amount),
        };
        grown.min(lower).max(value)
    }
}
