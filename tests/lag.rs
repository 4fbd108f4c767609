// tests/lag.rs
use bevy_prng::WyRand;
use penalty_goalie::systems::lag::LAG_SPREAD;
use penalty_goalie::{GoalieError, LagConfig, LagDistribution, LagModel};
use rand_core::SeedableRng;

fn model(distribution: LagDistribution) -> LagModel {
    LagModel::new(LagConfig { min_value: 0.12, distribution }).unwrap()
}

#[test]
fn upper_bound_is_the_percentile_lag() {
    let m = model(LagDistribution::Uniform);
    assert!((m.upper_bound(0.75) - 0.195).abs() < 1e-12);
    assert_eq!(m.representative(), m.upper_bound(0.75));
    assert!((m.upper_bound(0.0) - 0.12).abs() < 1e-12);
    assert!((m.upper_bound(1.0) - 0.22).abs() < 1e-12);
}

#[test]
fn fixed_draw_gives_fixed_lag() {
    let m = model(LagDistribution::Fixed { value: 0.5 });
    let mut rng = WyRand::from_seed(1u64.to_le_bytes());
    for _ in 0..10 {
        assert!((m.sample(&mut rng) - 0.17).abs() < 1e-12);
    }
}

#[test]
fn samples_stay_within_the_spread() {
    let dists = [
        LagDistribution::Uniform,
        LagDistribution::Triangular { mode: 0.3 },
        LagDistribution::Kumaraswamy { a: 2.0, b: 5.0 },
    ];
    let mut rng = WyRand::from_seed(42u64.to_le_bytes());
    for d in dists {
        let m = model(d);
        for _ in 0..2_000 {
            let lag = m.sample(&mut rng);
            assert!((0.12..=0.12 + LAG_SPREAD).contains(&lag), "{d:?} gave {lag}");
        }
    }
}

#[test]
fn quantiles_are_monotone() {
    let dists = [
        LagDistribution::Uniform,
        LagDistribution::Triangular { mode: 0.7 },
        LagDistribution::Kumaraswamy { a: 0.5, b: 3.0 },
    ];
    for d in dists {
        let qs: Vec<f64> = (0..=20).map(|i| d.quantile(i as f64 / 20.0)).collect();
        assert!(qs.windows(2).all(|w| w[0] <= w[1]), "{d:?}: {qs:?}");
        assert_eq!(qs[0], 0.0);
        assert!((qs[20] - 1.0).abs() < 1e-12);
    }
    let tri = LagDistribution::Triangular { mode: 0.4 };
    assert!((tri.quantile(0.4) - 0.4).abs() < 1e-12);
}

#[test]
fn uniform_draws_average_out() {
    let m = model(LagDistribution::Uniform);
    let mut rng = WyRand::from_seed(9u64.to_le_bytes());
    let n = 20_000;
    let mean = (0..n).map(|_| m.sample(&mut rng)).sum::<f64>() / n as f64;
    assert!((mean - 0.17).abs() < 0.002, "mean {mean}");
}

#[test]
fn same_seed_same_lags() {
    let m = model(LagDistribution::Kumaraswamy { a: 2.0, b: 2.0 });
    let mut a = WyRand::from_seed(5u64.to_le_bytes());
    let mut b = WyRand::from_seed(5u64.to_le_bytes());
    for _ in 0..50 {
        assert_eq!(m.sample(&mut a), m.sample(&mut b));
    }
}

#[test]
fn bad_lag_configs_are_rejected() {
    let bad = [
        LagConfig { min_value: -0.1, distribution: LagDistribution::Uniform },
        LagConfig { min_value: 0.1, distribution: LagDistribution::Triangular { mode: 1.5 } },
        LagConfig { min_value: 0.1, distribution: LagDistribution::Kumaraswamy { a: 0.0, b: 1.0 } },
        LagConfig { min_value: 0.1, distribution: LagDistribution::Fixed { value: 2.0 } },
    ];
    for cfg in bad {
        let err = LagModel::new(cfg).unwrap_err();
        assert!(matches!(err, GoalieError::InvalidLag { .. }), "{cfg:?}");
        assert!(err.is_configuration());
    }
}
