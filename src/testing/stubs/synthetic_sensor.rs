use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic stand-in for a noisy analog sensor.
///
/// Produces a bounded random walk in ADC units (`0..=1023`) with occasional
/// spikes, stopping after `max_samples`.
#[derive(Debug)]
pub struct SyntheticSensor {
    seed: u64,
    rng: StdRng,
    level: f32,
    max_samples: usize,
    produced: usize,
}

impl SyntheticSensor {
    pub const ADC_MAX: f32 = 1023.0;
    const STEP: f32 = 12.0;
    const SPIKE_PROBABILITY: f64 = 0.01;

    pub fn new(seed: u64, max_samples: usize) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            level: Self::ADC_MAX / 2.0,
            max_samples,
            produced: 0,
        }
    }

    pub fn next_sample(&mut self) -> Option<f32> {
        if self.produced >= self.max_samples {
            return None;
        }
        self.produced += 1;

        let step: f32 = self.rng.random_range(-Self::STEP..=Self::STEP);
        self.level = (self.level + step).clamp(0.0, Self::ADC_MAX);

        if self.rng.random_bool(Self::SPIKE_PROBABILITY) {
            return Some(self.rng.random_range(0.0..=Self::ADC_MAX));
        }
        Some(self.level)
    }

    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.level = Self::ADC_MAX / 2.0;
        self.produced = 0;
    }
}
