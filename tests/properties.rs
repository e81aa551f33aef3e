use proptest::prelude::*;
use rivu_bounds::bounds::RateMode;
use rivu_bounds::{BoundsTracker, DecayEnvelope, HardRange, SoftEnvelope};

fn samples() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-1.0e4f32..1.0e4, 1..200)
}

fn extreme_samples() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(
        prop_oneof![
            -3.4e38f32..3.4e38,
            Just(f32::MAX),
            Just(f32::MIN),
            -1.0e4f32..1.0e4,
        ],
        1..50,
    )
}

fn mode() -> impl Strategy<Value = RateMode> {
    prop_oneof![Just(RateMode::Linear), Just(RateMode::Exponential)]
}

fn decay_envelope(decay: f32, decay_mode: RateMode) -> DecayEnvelope {
    let mut env = DecayEnvelope::with_decay(decay);
    if decay_mode == RateMode::Linear {
        env.set_linear_decay();
    }
    env
}

fn soft_envelope(
    decay: f32,
    growth: f32,
    decay_mode: RateMode,
    growth_mode: RateMode,
) -> SoftEnvelope {
    let mut env = SoftEnvelope::new(decay, growth);
    if decay_mode == RateMode::Linear {
        env.set_linear_decay();
    }
    if growth_mode == RateMode::Linear {
        env.set_linear_growth();
    }
    env
}

fn assert_well_formed(t: &dyn BoundsTracker, query: f32) -> Result<(), TestCaseError> {
    prop_assert!(t.is_initialized());
    prop_assert!(t.upper() >= t.lower(), "upper {} < lower {}", t.upper(), t.lower());
    prop_assert!(t.range() >= 0.0);
    let n = t.normalize(query);
    prop_assert!((0.0..=1.0).contains(&n), "normalize({query}) = {n}");
    let n = t.normalized();
    prop_assert!((0.0..=1.0).contains(&n));
    Ok(())
}

proptest! {
    #[test]
    fn hard_range_stays_ordered(
        xs in samples(),
        floating in any::<bool>(),
        query in -1.0e6f32..1.0e6,
    ) {
        let mut r = HardRange::new();
        r.set_floating_lower(floating);
        for &x in &xs {
            r.update(x);
            assert_well_formed(&r, query)?;
            prop_assert!(r.max() >= x);
            if floating {
                prop_assert!(r.min() <= x);
            }
        }
    }

    #[test]
    fn decay_envelope_encloses_latest_sample(
        xs in samples(),
        decay in 0.0f32..2.0,
        decay_mode in mode(),
        query in -1.0e6f32..1.0e6,
    ) {
        let mut env = decay_envelope(decay, decay_mode);
        for &x in &xs {
            env.update(x);
            assert_well_formed(&env, query)?;
            prop_assert!(env.upper() >= x && env.lower() <= x);
        }
    }

    #[test]
    fn soft_envelope_stays_ordered(
        xs in samples(),
        decay in 0.0f32..2.0,
        growth in 0.0f32..2.0,
        decay_mode in mode(),
        growth_mode in mode(),
        query in -1.0e6f32..1.0e6,
    ) {
        let mut env = soft_envelope(decay, growth, decay_mode, growth_mode);
        for &x in &xs {
            env.update(x);
            assert_well_formed(&env, query)?;
        }
    }

    #[test]
    fn normalize_stays_in_unit_range_near_f32_limits(
        xs in extreme_samples(),
        decay in 0.0f32..1.0,
        query in prop_oneof![Just(f32::MAX), Just(f32::MIN), -3.4e38f32..3.4e38],
    ) {
        let mut r = HardRange::new();
        r.set_floating_lower(true);
        let mut d = DecayEnvelope::with_decay(decay);
        let mut s = SoftEnvelope::new(decay, 0.5);
        for &x in &xs {
            r.update(x);
            d.update(x);
            s.update(x);
            for t in [&r as &dyn BoundsTracker, &d, &s] {
                for n in [t.normalize(query), t.normalized()] {
                    prop_assert!((0.0..=1.0).contains(&n), "normalize gave {n}");
                }
            }
        }
    }

    #[test]
    fn exponential_growth_never_overshoots(
        start in -1.0e3f32..1.0e3,
        gap in 0.0f32..1.0e4,
        growth in 0.0f32..=1.0,
        steps in 1usize..100,
    ) {
        let target = start + gap;
        let mut env = SoftEnvelope::new(0.0, growth);
        env.update(start);
        let mut prev = env.upper();
        for _ in 0..steps {
            env.update(target);
            prop_assert!(env.upper() <= target);
            prop_assert!(env.upper() >= prev);
            prev = env.upper();
        }

        let low_target = start - gap;
        let mut env = SoftEnvelope::new(0.0, growth);
        env.update(start);
        for _ in 0..steps {
            env.update(low_target);
            prop_assert!(env.lower() >= low_target);
        }
    }

    #[test]
    fn full_growth_snaps_in_one_step(start in -1.0e3f32..1.0e3, gap in 0.0f32..1.0e4) {
        let mut env = SoftEnvelope::new(0.0, 1.0);
        env.update(start);
        env.update(start + gap);
        prop_assert_eq!(env.upper(), start + gap);
    }

    #[test]
    fn reset_matches_fresh_instance(xs in samples(), v in -1.0e4f32..1.0e4, decay in 0.0f32..1.0) {
        let mut r = HardRange::new();
        let mut d = DecayEnvelope::with_decay(decay);
        let mut s = SoftEnvelope::new(decay, 0.5);
        for &x in &xs {
            r.update(x);
            d.update(x);
            s.update(x);
        }
        r.reset();
        d.reset();
        s.reset();
        r.update(v);
        d.update(v);
        s.update(v);

        let mut fresh_r = HardRange::new();
        fresh_r.update(v);
        let mut fresh_d = DecayEnvelope::with_decay(decay);
        fresh_d.update(v);
        let mut fresh_s = SoftEnvelope::new(decay, 0.5);
        fresh_s.update(v);

        prop_assert_eq!(r, fresh_r);
        prop_assert_eq!(d, fresh_d);
        prop_assert_eq!(s, fresh_s);
    }
}

#[test]
fn uninitialized_trackers_report_zero() {
    let trackers: Vec<Box<dyn BoundsTracker>> = vec![
        Box::new(HardRange::new()),
        Box::new(DecayEnvelope::with_decay(0.3)),
        Box::new(SoftEnvelope::new(0.3, 0.3)),
    ];
    for t in &trackers {
        assert!(!t.is_initialized());
        assert_eq!(t.lower(), 0.0);
        assert_eq!(t.upper(), 0.0);
        assert_eq!(t.range(), 0.0);
        assert_eq!(t.normalized(), 0.0);
        assert_eq!(t.normalize(42.0), 0.0);
    }
}

#[test]
fn normalize_clamps_for_every_tracker() {
    let mut trackers: Vec<Box<dyn BoundsTracker>> = vec![
        Box::new(HardRange::new()),
        Box::new(DecayEnvelope::new()),
        Box::new(SoftEnvelope::new(0.0, 1.0)),
    ];
    for t in trackers.iter_mut() {
        t.update(0.0);
        t.update(100.0);
        assert_eq!(t.normalize(150.0), 1.0);
        assert_eq!(t.normalize(-50.0), 0.0);
    }
}
