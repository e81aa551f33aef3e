use crate::bounds::{BoundsTracker, DecayPolicy, GrowthPolicy, RateMode};
use tracing::{debug, trace};

/// Envelope whose bounds both widen and narrow gradually.
///
/// Each update runs two independent phases. Growth moves a bound that the
/// sample escaped toward the sample, by a fixed step (linear) or by a fraction
/// of the gap (exponential); it never overshoots. Decay then narrows every
/// bound that still encloses the sample, exactly like [`DecayEnvelope`], and
/// clamps it so it cannot cross the sample or the opposite bound.
///
/// Because a bound that trails an escaped sample is left to the growth phase,
/// `upper >= lower` always holds but `upper >= last_value >= lower` only holds
/// once growth has caught up with the sample. Right after `update(0.0)` and
/// `update(10.0)` with `growth = 0.5`, `upper()` is `5.0` while
/// `last_value()` is `10.0`; [`normalized`](BoundsTracker::normalized) clamps
/// such a sample to `1.0`.
///
/// With `growth == 0` the envelope never widens at all. That is a different
/// policy from [`DecayEnvelope`], which snaps out to new extremes.
///
/// [`DecayEnvelope`]: crate::bounds::DecayEnvelope
#[derive(Debug, Clone, PartialEq)]
pub struct SoftEnvelope {
    upper: f32,
    lower: f32,
    last_value: f32,
    decay: DecayPolicy,
    growth: GrowthPolicy,
    initialized: bool,
}

impl SoftEnvelope {
    /// Uninitialized envelope; the first sample sets both bounds.
    pub fn new(decay: f32, growth: f32) -> Self {
        Self {
            upper: 0.0,
            lower: 0.0,
            last_value: 0.0,
            decay: DecayPolicy::new(decay),
            growth: GrowthPolicy::new(growth),
            initialized: false,
        }
    }

    /// Starts initialized at `[0, upper]`; a negative `upper` is raised to 0.
    pub fn with_upper(upper: f32, decay: f32, growth: f32) -> Self {
        let mut env = Self::new(decay, growth);
        env.upper = upper.max(0.0);
        env.initialized = true;
        env
    }

    /// Starts initialized at `[lower, upper]`, swapping out-of-order bounds.
    pub fn with_bounds(lower: f32, upper: f32, decay: f32, growth: f32) -> Self {
        let (lower, upper) = if lower > upper {
            debug!(lower, upper, "swapping out-of-order envelope bounds");
            (upper, lower)
        } else {
            (lower, upper)
        };
        let mut env = Self::new(decay, growth);
        env.lower = lower;
        env.upper = upper;
        env.last_value = lower;
        env.initialized = true;
        env
    }

    pub fn set_decay(&mut self, decay: f32) {
        self.decay.amount = decay;
    }

    pub fn decay(&self) -> f32 {
        self.decay.amount
    }

    pub fn set_growth(&mut self, growth: f32) {
        self.growth.amount = growth;
    }

    pub fn growth(&self) -> f32 {
        self.growth.amount
    }

    pub fn set_linear_decay(&mut self) {
        self.decay.mode = RateMode::Linear;
    }

    pub fn set_exponential_decay(&mut self) {
        self.decay.mode = RateMode::Exponential;
    }

    pub fn set_linear_growth(&mut self) {
        self.growth.mode = RateMode::Linear;
    }

    pub fn set_exponential_growth(&mut self) {
        self.growth.mode = RateMode::Exponential;
    }

    pub fn decay_mode(&self) -> RateMode {
        self.decay.mode
    }

    pub fn growth_mode(&self) -> RateMode {
        self.growth.mode
    }

    #[inline]
    fn grow(&mut self, value: f32) {
        if value > self.upper {
            self.upper = self.growth.grow_upper(self.upper, value);
        }
        if value < self.lower {
            self.lower = self.growth.grow_lower(self.lower, value);
        }
    }

    #[inline]
    fn narrow(&mut self, value: f32) {
        // a bound still trailing an escaped sample belongs to the growth phase
        if self.upper >= value {
            self.upper = self.decay.decay_upper(self.upper, value).max(self.lower);
        }
        if self.lower <= value {
            self.lower = self.decay.decay_lower(self.lower, value).min(self.upper);
        }
    }
}

impl BoundsTracker for SoftEnvelope {
    fn update(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.last_value = value;

        if !self.initialized {
            self.upper = value;
            self.lower = value;
            self.initialized = true;
            return;
        }

        if self.growth.is_active() {
            self.grow(value);
        }
        if self.decay.is_active() {
            self.narrow(value);
        }
    }

    fn lower(&self) -> f32 {
        if self.initialized { self.lower } else { 0.0 }
    }

    fn upper(&self) -> f32 {
        if self.initialized { self.upper } else { 0.0 }
    }

    fn last_value(&self) -> f32 {
        self.last_value
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn reset(&mut self) {
        trace!(
            decay = self.decay.amount,
            growth = self.growth.amount,
            "resetting soft envelope"
        );
        self.upper = 0.0;
        self.lower = 0.0;
        self.last_value = 0.0;
        self.initialized = false;
    }
}
