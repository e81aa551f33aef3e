use crate::bounds::{BoundsTracker, DecayEnvelope, HardRange, RateMode, SoftEnvelope};
use crate::config::BuildError;
use crate::config::choices::{DecayEnvelopeParams, HardRangeParams, SoftEnvelopeParams, TrackerChoice};
use std::convert::TryFrom;
use tracing::debug;

/// Where a configured tracker starts before its first sample.
enum Start {
    Empty,
    Upper(f32),
    Bounds(f32, f32),
}

fn check_amount(name: &str, value: f32) -> Result<f32, BuildError> {
    if !value.is_finite() || value < 0.0 {
        return Err(BuildError::InvalidParameter(format!(
            "{name} must be a finite, non-negative number (got {value})"
        )));
    }
    Ok(value)
}

fn check_bound(name: &str, value: f32) -> Result<f32, BuildError> {
    if !value.is_finite() {
        return Err(BuildError::InvalidParameter(format!(
            "{name} must be finite (got {value})"
        )));
    }
    Ok(value)
}

fn start_from(lower: Option<f32>, upper: Option<f32>) -> Result<Start, BuildError> {
    match (lower, upper) {
        (None, None) => Ok(Start::Empty),
        (None, Some(u)) => Ok(Start::Upper(check_bound("upper", u)?)),
        (Some(l), Some(u)) => Ok(Start::Bounds(
            check_bound("lower", l)?,
            check_bound("upper", u)?,
        )),
        (Some(_), None) => Err(BuildError::InvalidParameter(
            "lower requires upper to be set".into(),
        )),
    }
}

impl TryFrom<HardRangeParams> for HardRange {
    type Error = BuildError;

    fn try_from(params: HardRangeParams) -> Result<Self, Self::Error> {
        let floor = check_bound("floor", params.floor)?;

        let mut range = match start_from(params.lower, params.upper)? {
            Start::Empty => HardRange::new(),
            Start::Upper(u) => HardRange::with_upper_and_floor(u, floor),
            Start::Bounds(l, u) => HardRange::with_bounds(l, u),
        };
        range.set_floor(floor);
        if params.floating_lower {
            range.set_floating_lower(true);
        }
        Ok(range)
    }
}

impl TryFrom<DecayEnvelopeParams> for DecayEnvelope {
    type Error = BuildError;

    fn try_from(params: DecayEnvelopeParams) -> Result<Self, Self::Error> {
        let decay = check_amount("decay", params.decay)?;

        let mut env = match start_from(params.lower, params.upper)? {
            Start::Empty => DecayEnvelope::with_decay(decay),
            Start::Upper(u) => DecayEnvelope::with_upper(u, decay),
            Start::Bounds(l, u) => DecayEnvelope::with_bounds(l, u, decay),
        };
        match params.decay_mode {
            RateMode::Linear => env.set_linear_decay(),
            RateMode::Exponential => env.set_exponential_decay(),
        }
        Ok(env)
    }
}

impl TryFrom<SoftEnvelopeParams> for SoftEnvelope {
    type Error = BuildError;

    fn try_from(params: SoftEnvelopeParams) -> Result<Self, Self::Error> {
        let decay = check_amount("decay", params.decay)?;
        let growth = check_amount("growth", params.growth)?;

        let mut env = match start_from(params.lower, params.upper)? {
            Start::Empty => SoftEnvelope::new(decay, growth),
            Start::Upper(u) => SoftEnvelope::with_upper(u, decay, growth),
            Start::Bounds(l, u) => SoftEnvelope::with_bounds(l, u, decay, growth),
        };
        match params.decay_mode {
            RateMode::Linear => env.set_linear_decay(),
            RateMode::Exponential => env.set_exponential_decay(),
        }
        match params.growth_mode {
            RateMode::Linear => env.set_linear_growth(),
            RateMode::Exponential => env.set_exponential_growth(),
        }
        Ok(env)
    }
}

pub fn build_tracker(choice: TrackerChoice) -> Result<Box<dyn BoundsTracker>, BuildError> {
    let kind = choice.kind();
    let tracker: Box<dyn BoundsTracker> = match choice {
        TrackerChoice::HardRange(p) => Box::new(HardRange::try_from(p)?),
        TrackerChoice::DecayEnvelope(p) => Box::new(DecayEnvelope::try_from(p)?),
        TrackerChoice::SoftEnvelope(p) => Box::new(SoftEnvelope::try_from(p)?),
    };
    debug!(%kind, initialized = tracker.is_initialized(), "built bounds tracker");
    Ok(tracker)
}

/// Builds a tracker from an already-parsed JSON value.
pub fn build_tracker_from_value(
    value: serde_json::Value,
) -> Result<Box<dyn BoundsTracker>, BuildError> {
    let choice: TrackerChoice = serde_json::from_value(value)?;
    build_tracker(choice)
}
