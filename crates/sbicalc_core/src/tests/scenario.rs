//! Scenario calculator tests
//!
//! The reference case is the default assumption set; every stage is checked
//! against hand-computed values, then individual stages are broken to check
//! that unavailability cascades instead of defaulting to zero.

use super::assert_close;
use crate::catalog::Field;
use crate::evaluate::{evaluate, shots_per_threat};
use crate::learning::{crawford_average_cost, cumulative_learning_cost};
use crate::model::{Assumptions, is_available};
use crate::propulsion::{FlyoutLimit, STANDARD_GRAVITY};

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_default_engagement_and_mass() {
    let report = evaluate(&Assumptions::default());

    assert_eq!(report.interceptors_per_threat, 2.0);
    assert_eq!(report.interceptors_per_salvo, 2.0);
    assert_close(report.composite_kill_probability_percent, 96.0, 1e-9);
    assert_eq!(report.requested_composite_kill_probability_percent, 96.0);

    assert_close(report.kill_vehicle_propellant_mass_kg, 47.318_517_260_149_8, 1e-9);
    assert_close(report.interceptor_propellant_mass_kg, 1_148.165_888_960_952, 1e-8);
    assert_eq!(report.interceptor_dry_mass_kg, 100.0);
    assert_close(report.interceptor_mass_kg, 1_295.484_406_221_101_8, 1e-8);
    assert_close(report.delta_v_margin_km_per_s, 3.5, 1e-12);
}

#[test]
fn test_default_kinematics_and_coverage() {
    let report = evaluate(&Assumptions::default());

    assert_close(report.average_acceleration_m_s2, 15.0 * STANDARD_GRAVITY, 1e-12);
    assert_close(report.time_to_reach_max_velocity_seconds, 40.788_648_519_117, 1e-9);
    assert_close(report.interceptor_flyout_range_km, 597.634_054_442_648_7, 1e-9);
    assert!(report.flyout_range_message.is_none());
    assert_close(report.coverage_radius_km, 589.208_335_845_275_3, 1e-9);
    assert_close(report.earth_coverage_sq_km, 543_764_444.501_297, 1e-3);
}

#[test]
fn test_default_sizing_and_launch() {
    let report = evaluate(&Assumptions::default());

    assert_eq!(report.constellation_size, 998.0);
    assert_eq!(report.interceptor_replacements, 4.0);
    assert_eq!(report.total_interceptors, 3992.0);
    assert_close(report.interceptors_per_year, 199.6, 1e-9);
    assert_eq!(report.interceptors_per_launch, 34.0);
    assert_eq!(report.launch_count, 30.0);
    assert_close(report.payload_utilization_kg, 44_046.469_811_517_46, 1e-6);
    assert_close(report.payload_utilization_percent, 97.881_044_025_594, 1e-9);
    assert_close(report.total_payload_to_orbit_kg, 5_285_576.377_382_095, 1e-3);
}

#[test]
fn test_default_cost_rollup() {
    let report = evaluate(&Assumptions::default());

    assert_close(report.average_procurement_unit_cost_million, 18.202_572_511_267_118, 1e-9);
    assert_close(report.average_launch_cost_million, 131.342_188_413_954_63, 1e-9);
    assert_close(report.launch_campaign_cost_million, 3_940.265_652_418_639, 1e-7);
    assert_close(report.total_procurement_cost_million, 72_664.669_464_978_33, 1e-6);
    assert_close(report.total_launch_cost_million, 15_761.062_609_674_556, 1e-6);
    assert_eq!(report.operations_cost_million, 9000.0);
    assert_eq!(report.non_recurring_million, 7000.0);
    assert_close(report.total_system_cost_million, 104_425.732_074_652_89, 1e-6);
    assert_close(report.total_system_cost_billion, 104.425_732_074_652_88, 1e-9);
    assert_close(report.production_cost_million, 52_185.850_652_162_895, 1e-5);
    assert!(report.unavailable().is_empty(), "{:?}", report.unavailable());
}

#[test]
fn test_total_is_sum_of_parts() {
    let report = evaluate(&Assumptions::default());
    let parts = report.total_procurement_cost_million
        + report.total_launch_cost_million
        + report.operations_cost_million
        + report.non_recurring_million;
    assert_close(report.total_system_cost_million, parts, 1e-6);
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_shots_example() {
    // ln(0.04) / ln(0.2) lands a hair under 2
    assert_eq!(shots_per_threat(80.0, 96.0), 2.0);
}

#[test]
fn test_learning_curve_single_unit() {
    // The discrete sum is exactly the first-unit cost at Q = 1
    assert_eq!(cumulative_learning_cost(70.0, 85.0, 1), 70.0);
    // The Crawford approximation at Q = 1 is C₁·2/(1+b)
    let b = 0.85f64.log2();
    assert_close(crawford_average_cost(70.0, 85.0, 1.0), 140.0 / (1.0 + b), 1e-9);
}

#[test]
fn test_divert_equal_to_delta_v() {
    let a = Assumptions::default().with(Field::DivertVelocityKmPerS, 6.0);
    let report = evaluate(&a);
    assert_eq!(report.delta_v_margin_km_per_s, 0.0);

    // The main burn still carries the full ΔV budget
    let stack = a.kill_vehicle_dry_mass_kg
        + report.kill_vehicle_propellant_mass_kg
        + a.interceptor_body_dry_mass_kg;
    let ratio = (6.0 * 1000.0 / (STANDARD_GRAVITY * a.thruster_isp_seconds)).exp();
    assert!(is_available(report.interceptor_propellant_mass_kg));
    assert_close(report.interceptor_propellant_mass_kg, stack * (ratio - 1.0), 1e-6);
}

#[test]
fn test_zero_divert_needs_no_kill_vehicle_propellant() {
    let report = evaluate(&Assumptions::default().with(Field::DivertVelocityKmPerS, 0.0));
    assert_eq!(report.kill_vehicle_propellant_mass_kg, 0.0);
    assert!(is_available(report.interceptor_mass_kg));
}

#[test]
fn test_salvo_size_scales_constellation() {
    let report = evaluate(&Assumptions::default().with(Field::SalvoSize, 2.0));
    assert_eq!(report.interceptors_per_salvo, 4.0);
    assert_eq!(report.constellation_size, 1995.0);
}

#[test]
fn test_short_period_keeps_one_generation() {
    let report = evaluate(&Assumptions::default().with(Field::CostEstimatePeriodYears, 3.0));
    assert_eq!(report.interceptor_replacements, 1.0);
    assert_eq!(report.total_interceptors, report.constellation_size);
}

// ============================================================================
// Degradation
// ============================================================================

#[test]
fn test_insufficient_acceleration_cascades() {
    let report = evaluate(&Assumptions::default().with(Field::FlyoutTimeSeconds, 30.0));

    assert!(report.interceptor_flyout_range_km.is_nan());
    assert_eq!(
        report.flyout_range_message.as_deref(),
        Some(
            "Acceleration is insufficient to reach the velocity specified over the flyout time specified."
        )
    );
    for value in [
        report.coverage_radius_km,
        report.constellation_size,
        report.launch_count,
        report.total_interceptors,
        report.average_procurement_unit_cost_million,
        report.production_cost_million,
        report.total_system_cost_billion,
    ] {
        assert!(value.is_nan());
    }

    // Stages that do not depend on flyout range are untouched
    assert!(is_available(report.interceptor_mass_kg));
    assert!(is_available(report.interceptors_per_launch));
    assert!(is_available(report.earth_coverage_sq_km));
}

#[test]
fn test_zero_acceleration_reports_invalid_timing() {
    let report = evaluate(&Assumptions::default().with(Field::AverageAccelerationG, 0.0));
    assert!(report.time_to_reach_max_velocity_seconds.is_nan());
    assert_eq!(
        report.flyout_range_message.as_deref(),
        Some(FlyoutLimit::InvalidTiming.to_string().as_str())
    );
}

#[test]
fn test_unreachable_altitude_band() {
    // 597 km of flyout cannot span a 21,000 km altitude gap
    let report = evaluate(&Assumptions::default().with(Field::SbiOrbitAltitudeKm, 21_200.0));
    assert!(is_available(report.interceptor_flyout_range_km));
    assert!(report.coverage_radius_km.is_nan());
    assert!(report.constellation_size.is_nan());
    assert!(report.total_system_cost_million.is_nan());
}

#[test]
fn test_interceptor_heavier_than_launcher() {
    let report = evaluate(&Assumptions::default().with(Field::PayloadCapacityPerVehicleKg, 1000.0));
    assert!(report.interceptors_per_launch.is_nan());
    assert!(report.payload_utilization_kg.is_nan());
    assert!(report.launch_count.is_nan());
    assert!(report.average_launch_cost_million.is_nan());
    assert!(report.total_system_cost_million.is_nan());
    // Procurement does not depend on launch packing
    assert!(is_available(report.average_procurement_unit_cost_million));
}

#[test]
fn test_zero_isp_makes_mass_unavailable() {
    let report = evaluate(&Assumptions::default().with(Field::ThrusterIspSeconds, 0.0));
    assert!(report.kill_vehicle_propellant_mass_kg.is_nan());
    assert!(report.interceptor_propellant_mass_kg.is_nan());
    assert!(report.interceptor_mass_kg.is_nan());
    assert!(report.interceptors_per_launch.is_nan());
    assert_eq!(report.interceptor_dry_mass_kg, 100.0);
}

#[test]
fn test_unavailable_input_never_becomes_zero() {
    let report = evaluate(&Assumptions::unavailable());
    assert!(report.total_system_cost_million.is_nan());
    assert!(report.interceptor_mass_kg.is_nan());
    assert!(report.constellation_size.is_nan());
    assert!(report.interceptors_per_threat.is_nan());
    assert!(report.production_cost_million.is_nan());
}
