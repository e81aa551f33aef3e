use crate::bounds::BoundsSnapshot;
use crate::utils::math::normalize_within;

/// Online tracker of an upper/lower bound pair over a scalar sample stream.
///
/// Implementations accept samples one at a time via [`update`] and expose the
/// current bounds. Before the first sample (or after [`reset`]) every bound
/// query returns `0.0` and [`is_initialized`] is `false`.
///
/// [`update`]: BoundsTracker::update
/// [`reset`]: BoundsTracker::reset
/// [`is_initialized`]: BoundsTracker::is_initialized
pub trait BoundsTracker {
    /// Incorporates a new sample. NaN samples are ignored.
    fn update(&mut self, value: f32);

    /// Current lower bound, `0.0` while uninitialized.
    fn lower(&self) -> f32;

    /// Current upper bound, `0.0` while uninitialized.
    fn upper(&self) -> f32;

    /// Most recently observed sample.
    fn last_value(&self) -> f32;

    fn is_initialized(&self) -> bool;

    /// Returns the tracker to its uninitialized state, keeping its policy.
    fn reset(&mut self);

    /// Width of the envelope; never negative.
    fn range(&self) -> f32 {
        if !self.is_initialized() {
            return 0.0;
        }
        (self.upper() - self.lower()).max(0.0)
    }

    /// Maps `value` into `[0, 1]` relative to the current bounds.
    ///
    /// Returns `0.0` while uninitialized or when the range is zero.
    fn normalize(&self, value: f32) -> f32 {
        if !self.is_initialized() {
            return 0.0;
        }
        normalize_within(value, self.lower(), self.upper())
    }

    /// Normalized position of the most recent sample.
    fn normalized(&self) -> f32 {
        self.normalize(self.last_value())
    }

    fn snapshot(&self) -> BoundsSnapshot {
        BoundsSnapshot {
            initialized: self.is_initialized(),
            lower: self.lower(),
            upper: self.upper(),
            range: self.range(),
            normalized: self.normalized(),
        }
    }
}
