use crate::bounds::{BoundsTracker, DecayPolicy, RateMode};
use tracing::{debug, trace};

/// Envelope that snaps out to new extremes and decays back toward the most
/// recent sample.
///
/// Decay is exponential by default: every update keeps `1 - decay` of the
/// distance between each bound and the sample. In linear mode each bound moves
/// `decay` units toward the sample instead. Either way a bound never crosses
/// the sample, so `upper >= last_value >= lower` after every update.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayEnvelope {
    upper: f32,
    lower: f32,
    last_value: f32,
    decay: DecayPolicy,
    initialized: bool,
}

impl Default for DecayEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl DecayEnvelope {
    /// Envelope without decay; it only ever grows.
    pub fn new() -> Self {
        Self::with_decay(0.0)
    }

    pub fn with_decay(decay: f32) -> Self {
        Self {
            upper: 0.0,
            lower: 0.0,
            last_value: 0.0,
            decay: DecayPolicy::new(decay),
            initialized: false,
        }
    }

    /// Starts initialized at `[0, upper]`.
    pub fn with_upper(upper: f32, decay: f32) -> Self {
        Self::with_bounds(0.0, upper, decay)
    }

    /// Starts initialized at `[lower, upper]`, swapping out-of-order bounds.
    pub fn with_bounds(lower: f32, upper: f32, decay: f32) -> Self {
        let (lower, upper) = if lower > upper {
            debug!(lower, upper, "swapping out-of-order envelope bounds");
            (upper, lower)
        } else {
            (lower, upper)
        };
        Self {
            upper,
            lower,
            last_value: lower,
            decay: DecayPolicy::new(decay),
            initialized: true,
        }
    }

    pub fn set_decay(&mut self, decay: f32) {
        self.decay.amount = decay;
    }

    pub fn decay(&self) -> f32 {
        self.decay.amount
    }

    pub fn set_linear_decay(&mut self) {
        self.decay.mode = RateMode::Linear;
    }

    pub fn set_exponential_decay(&mut self) {
        self.decay.mode = RateMode::Exponential;
    }

    pub fn decay_mode(&self) -> RateMode {
        self.decay.mode
    }
}

impl BoundsTracker for DecayEnvelope {
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

        if value > self.upper {
            self.upper = value;
        }
        if value < self.lower {
            self.lower = value;
        }

        if self.decay.is_active() {
            self.upper = self.decay.decay_upper(self.upper, value);
            self.lower = self.decay.decay_lower(self.lower, value);
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
        trace!(decay = self.decay.amount, "resetting decay envelope");
        self.upper = 0.0;
        self.lower = 0.0;
        self.last_value = 0.0;
        self.initialized = false;
    }
}
