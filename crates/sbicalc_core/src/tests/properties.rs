//! Randomized property tests
//!
//! Valid assumption sets are drawn from a seeded generator so failures are
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::{MetricId, SweepRequest, default_range, locate, sweep};
use crate::catalog::{Catalog, Field};
use crate::error::SweepError;
use crate::evaluate::evaluate;
use crate::model::{Assumptions, RawInputs};
use crate::normalize::normalize;
use crate::persist::to_query_pairs;

const CASES: usize = 200;

/// An assumption set that passes every validation rule
fn random_assumptions(rng: &mut StdRng) -> Assumptions {
    let orbit = rng.random_range(150.0..2000.0);
    let delta_v = rng.random_range(0.5..15.0);
    Assumptions {
        sbi_orbit_altitude_km: orbit,
        average_acceleration_g: rng.random_range(1.0..30.0),
        max_delta_v_km_per_s: delta_v,
        divert_velocity_km_per_s: rng.random_range(0.0..=delta_v),
        thruster_isp_seconds: rng.random_range(150.0..500.0),
        kill_vehicle_dry_mass_kg: rng.random_range(1.0..100.0),
        interceptor_body_dry_mass_kg: rng.random_range(1.0..100.0),
        support_module_dry_mass_kg: rng.random_range(1.0..100.0),
        sbi_life_expectancy_years: rng.random_range(1..=20) as f64,
        kill_probability_percent: rng.random_range(1.0..99.0),
        composite_kill_probability_percent: rng.random_range(1.0..99.9),
        salvo_size: rng.random_range(1..=20) as f64,
        intercept_altitude_km: rng.random_range(50.0..=orbit),
        max_latitude_coverage_deg: rng.random_range(0.0..=90.0),
        flyout_time_seconds: rng.random_range(10.0..1800.0),
        non_recurring_dev_cost_million: rng.random_range(0.0..20_000.0),
        first_unit_interceptor_cost_million: rng.random_range(1.0..200.0),
        interceptor_learning_percent: rng.random_range(70.0..=100.0),
        operating_support_cost_per_year_million: rng.random_range(0.0..1000.0),
        cost_estimate_period_years: rng.random_range(1..=50) as f64,
        payload_capacity_per_vehicle_kg: rng.random_range(15_000.0..300_000.0),
        first_unit_launch_cost_million: rng.random_range(1.0..300.0),
        launch_learning_percent: rng.random_range(70.0..=100.0),
    }
}

#[test]
fn test_evaluate_is_total() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let a = random_assumptions(&mut rng);
        let report = evaluate(&a);
        for (key, value) in report.quantities() {
            assert!(
                value.is_finite() || value.is_nan(),
                "{key} = {value} for {a:?}"
            );
        }
    }
}

#[test]
fn test_evaluate_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let a = random_assumptions(&mut rng);
        let first = evaluate(&a);
        let second = evaluate(&a);
        for ((key, x), (_, y)) in first.quantities().into_iter().zip(second.quantities()) {
            assert_eq!(x.to_bits(), y.to_bits(), "{key} differs between runs");
        }
        assert_eq!(first.flyout_range_message, second.flyout_range_message);
    }
}

#[test]
fn test_shots_monotonic_in_composite_pk() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..25 {
        let a = random_assumptions(&mut rng);
        let mut previous = 0.0;
        for tenth in 10..999 {
            let desired = f64::from(tenth) / 10.0;
            let report = evaluate(&a.with(Field::CompositeKillProbabilityPercent, desired));
            assert!(
                report.interceptors_per_threat >= previous,
                "shots fell at {desired}% with Pk {}",
                a.kill_probability_percent
            );
            previous = report.interceptors_per_threat;
        }
    }
}

#[test]
fn test_query_pairs_round_trip_through_normalize() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..CASES {
        let a = random_assumptions(&mut rng);
        let raw: RawInputs = to_query_pairs(&a).into_iter().collect();
        let normalized = normalize(&raw);
        assert!(normalized.is_valid(), "{}", normalized.errors);
        for field in Field::ALL {
            let tolerance = 0.5 * 10f64.powi(-(field.spec().decimals() as i32)) + 1e-9;
            let (before, after) = (a.get(field), normalized.assumptions.get(field));
            assert!(
                (before - after).abs() <= tolerance,
                "{}: {before} became {after}",
                field.key()
            );
        }
    }
}

#[test]
fn test_sweeps_are_ordered_and_locatable() {
    let catalog = Catalog::standard();
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..40 {
        let baseline = random_assumptions(&mut rng);
        let field = Field::ALL[rng.random_range(0..Field::ALL.len())];
        let metric = MetricId::ALL[rng.random_range(0..MetricId::ALL.len())];
        let (start, end) = default_range(field.spec(), Some(&baseline));
        let request = SweepRequest::new(field.key(), metric, start.to_string(), end.to_string());

        match sweep(&catalog, Some(&baseline), &request) {
            Ok(result) => {
                assert!(result.points.windows(2).all(|w| w[0].x < w[1].x));
                for (i, point) in result.points.iter().enumerate() {
                    assert!(point.y.is_finite());
                    assert_eq!(locate(&result.points, point.x), Some(i));
                }
            }
            Err(SweepError::NoValidPoints) => {}
            Err(other) => panic!("{} over {start}..{end}: {other}", field.key()),
        }
    }
}
