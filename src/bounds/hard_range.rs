use crate::bounds::BoundsTracker;
use tracing::{debug, trace};

/// Exact minimum and maximum of every sample seen, with no decay.
///
/// By default the lower bound is pinned at a fixed floor (`0.0`) and only the
/// upper bound follows the data. With [`set_floating_lower`] enabled the lower
/// bound tracks the true minimum instead. The true minimum is recorded in both
/// modes, so the flag can be flipped mid-stream.
///
/// [`set_floating_lower`]: HardRange::set_floating_lower
#[derive(Debug, Clone, PartialEq)]
pub struct HardRange {
    observed_min: f32,
    max: f32,
    last_value: f32,
    initialized: bool,
    floating_lower: bool,
    floor: f32,
}

impl Default for HardRange {
    fn default() -> Self {
        Self::new()
    }
}

impl HardRange {
    pub const DEFAULT_FLOOR: f32 = 0.0;

    pub fn new() -> Self {
        Self {
            observed_min: 0.0,
            max: 0.0,
            last_value: 0.0,
            initialized: false,
            floating_lower: false,
            floor: Self::DEFAULT_FLOOR,
        }
    }

    /// Starts initialized with the given upper bound and the lower bound pinned
    /// at the floor.
    pub fn with_upper(upper: f32) -> Self {
        Self::with_upper_and_floor(upper, Self::DEFAULT_FLOOR)
    }

    /// Like [`with_upper`](HardRange::with_upper), pinned at a custom floor.
    pub fn with_upper_and_floor(upper: f32, floor: f32) -> Self {
        let mut r = Self::new();
        r.floor = floor;
        r.observed_min = r.floor;
        r.max = upper;
        r.last_value = r.floor;
        r.initialized = true;
        r
    }

    /// Starts initialized with explicit bounds; see [`set_initial_bounds`].
    ///
    /// [`set_initial_bounds`]: HardRange::set_initial_bounds
    pub fn with_bounds(lower: f32, upper: f32) -> Self {
        let mut r = Self::new();
        r.set_initial_bounds(lower, upper);
        r
    }

    /// Primes the bounds before (or instead of) any samples.
    ///
    /// Out-of-order arguments are swapped. An explicit lower bound is tracked
    /// rather than pinned, so this also enables the floating lower bound.
    pub fn set_initial_bounds(&mut self, lower: f32, upper: f32) {
        let (lower, upper) = if lower > upper {
            debug!(lower, upper, "swapping out-of-order initial bounds");
            (upper, lower)
        } else {
            (lower, upper)
        };

        self.observed_min = lower;
        self.max = upper;
        self.last_value = lower;
        self.initialized = true;
        self.floating_lower = true;
    }

    pub fn set_floating_lower(&mut self, enable: bool) {
        self.floating_lower = enable;
    }

    pub fn floating_lower(&self) -> bool {
        self.floating_lower
    }

    /// Changes the value the lower bound is pinned at while not floating.
    pub fn set_floor(&mut self, floor: f32) {
        self.floor = floor;
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Smallest tracked value, or the floor when the lower bound is pinned.
    pub fn min(&self) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        if self.floating_lower {
            self.observed_min
        } else {
            self.floor
        }
    }

    /// Largest value seen; never reported below [`min`](HardRange::min).
    pub fn max(&self) -> f32 {
        if !self.initialized {
            return 0.0;
        }
        self.max.max(self.min())
    }
}

impl BoundsTracker for HardRange {
    fn update(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.last_value = value;

        if !self.initialized {
            self.observed_min = value;
            self.max = value;
            self.initialized = true;
            return;
        }

        if value < self.observed_min {
            self.observed_min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    fn lower(&self) -> f32 {
        self.min()
    }

    fn upper(&self) -> f32 {
        self.max()
    }

    fn last_value(&self) -> f32 {
        self.last_value
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn reset(&mut self) {
        trace!(floating_lower = self.floating_lower, "resetting hard range");
        self.observed_min = 0.0;
        self.max = 0.0;
        self.last_value = 0.0;
        self.initialized = false;
    }
}
