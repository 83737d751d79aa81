//! The scenario calculator.
//!
//! [`evaluate`] is a pure, total function of an [`Assumptions`] record. It
//! never fails: each stage degrades to NaN when its precursors are unusable,
//! and every quantity derived from a NaN is NaN as well.

use crate::learning::{crawford_average_cost, cumulative_learning_cost};
use crate::model::{Assumptions, MetricsReport};
use crate::propulsion::{Flyout, coverage_radius_km, earth_coverage_sq_km, propellant_mass};

/// Whole shots needed per threat to reach `desired_percent` composite kill
/// probability with `single_shot_percent` per shot.
///
/// Returns 1 when either probability is at or above 100%, and NaN when
/// either is non-positive or not a number.
#[must_use]
pub fn shots_per_threat(single_shot_percent: f64, desired_percent: f64) -> f64 {
    let single = single_shot_percent / 100.0;
    let desired = desired_percent / 100.0;
    if !single.is_finite() || !desired.is_finite() || single <= 0.0 || desired <= 0.0 {
        return f64::NAN;
    }
    if single >= 1.0 || desired >= 1.0 {
        return 1.0;
    }
    let required = (1.0 - desired).ln() / (1.0 - single).ln();
    required.ceil().max(1.0)
}

/// Composite kill probability (percent) achieved by `shots` independent shots
#[must_use]
pub fn attained_composite_percent(single_shot_percent: f64, shots: f64) -> f64 {
    if !shots.is_finite() {
        return f64::NAN;
    }
    100.0 * (1.0 - (1.0 - single_shot_percent / 100.0).powf(shots))
}

/// NaN unless every listed value is finite
fn when_finite(values: &[f64], compute: impl FnOnce() -> f64) -> f64 {
    if values.iter().all(|v| v.is_finite()) {
        compute()
    } else {
        f64::NAN
    }
}

/// Size and cost the constellation described by `a`.
#[must_use]
pub fn evaluate(a: &Assumptions) -> MetricsReport {
    // Engagement
    let shots = shots_per_threat(a.kill_probability_percent, a.composite_kill_probability_percent);
    let interceptors_per_salvo = when_finite(&[shots], || shots * a.salvo_size);
    let attained_pk = attained_composite_percent(a.kill_probability_percent, shots);

    // Two-stage propellant: the kill vehicle's divert burn, then the main
    // burn pushing the kill vehicle and interceptor body
    let kv_propellant = propellant_mass(
        a.kill_vehicle_dry_mass_kg,
        a.divert_velocity_km_per_s,
        a.thruster_isp_seconds,
    );
    let pre_main_burn_mass =
        a.kill_vehicle_dry_mass_kg + kv_propellant + a.interceptor_body_dry_mass_kg;
    let main_propellant = if pre_main_burn_mass.is_finite() {
        propellant_mass(
            pre_main_burn_mass,
            a.max_delta_v_km_per_s,
            a.thruster_isp_seconds,
        )
    } else {
        f64::NAN
    };

    let dry_mass =
        a.kill_vehicle_dry_mass_kg + a.interceptor_body_dry_mass_kg + a.support_module_dry_mass_kg;
    let total_mass = when_finite(&[kv_propellant, main_propellant], || {
        dry_mass + kv_propellant + main_propellant
    });

    // Kinematics and coverage
    let flyout = Flyout::compute(
        a.average_acceleration_g,
        a.max_delta_v_km_per_s,
        a.flyout_time_seconds,
    );
    let coverage_radius = when_finite(&[flyout.range_km], || {
        coverage_radius_km(
            flyout.range_km,
            a.sbi_orbit_altitude_km,
            a.intercept_altitude_km,
        )
    });
    let earth_coverage = earth_coverage_sq_km(a.intercept_altitude_km, a.max_latitude_coverage_deg);

    let constellation_size = constellation_size(coverage_radius, earth_coverage, a.salvo_size, shots);

    // Replenishment
    let generations = if a.sbi_life_expectancy_years > 0.0 {
        let ratio = a.cost_estimate_period_years / a.sbi_life_expectancy_years;
        when_finite(&[ratio], || ratio.floor().max(1.0))
    } else {
        f64::NAN
    };
    let total_interceptors = when_finite(&[constellation_size, generations], || {
        constellation_size * generations
    });
    let interceptors_per_year = if a.cost_estimate_period_years > 0.0 {
        when_finite(&[total_interceptors], || {
            total_interceptors / a.cost_estimate_period_years
        })
    } else {
        f64::NAN
    };

    // Launch packing
    let capacity = a.payload_capacity_per_vehicle_kg;
    let interceptors_per_launch =
        if total_mass.is_finite() && total_mass > 0.0 && capacity.is_finite() && capacity > 0.0 {
            let fit = (capacity / total_mass).floor();
            if fit >= 1.0 { fit } else { f64::NAN }
        } else {
            f64::NAN
        };
    let payload_utilization = when_finite(&[interceptors_per_launch, total_mass], || {
        interceptors_per_launch * total_mass
    });
    let payload_utilization_percent = if capacity > 0.0 {
        when_finite(&[payload_utilization], || payload_utilization / capacity * 100.0)
    } else {
        f64::NAN
    };
    let launch_count = when_finite(&[constellation_size, interceptors_per_launch], || {
        (constellation_size / interceptors_per_launch).ceil()
    });
    let total_payload_to_orbit = when_finite(&[payload_utilization, launch_count, generations], || {
        payload_utilization * launch_count * generations
    });

    // Costs; learning restarts at the first unit every generation
    let production_cost = if total_interceptors.is_finite() && total_interceptors > 0.0 {
        cumulative_learning_cost(
            a.first_unit_interceptor_cost_million,
            a.interceptor_learning_percent,
            total_interceptors.round() as u64,
        )
    } else {
        f64::NAN
    };
    let average_procurement = crawford_average_cost(
        a.first_unit_interceptor_cost_million,
        a.interceptor_learning_percent,
        constellation_size,
    );
    let average_launch = crawford_average_cost(
        a.first_unit_launch_cost_million,
        a.launch_learning_percent,
        launch_count,
    );
    let launch_campaign = when_finite(&[average_launch, launch_count], || {
        average_launch * launch_count
    });
    let procurement_per_generation = when_finite(&[average_procurement, constellation_size], || {
        average_procurement * constellation_size
    });

    let non_recurring = a.non_recurring_dev_cost_million;
    let operations = a.operating_support_cost_per_year_million * a.cost_estimate_period_years;

    let cycle_cost = when_finite(&[procurement_per_generation, launch_campaign], || {
        procurement_per_generation + launch_campaign
    });
    let total_million = when_finite(&[cycle_cost, generations], || {
        cycle_cost * generations + operations + non_recurring
    });
    let total_billion = when_finite(&[total_million], || total_million / 1000.0);

    MetricsReport {
        total_system_cost_million: total_million,
        total_system_cost_billion: total_billion,
        non_recurring_million: non_recurring,
        production_cost_million: production_cost,
        operations_cost_million: operations,
        launch_campaign_cost_million: launch_campaign,
        total_procurement_cost_million: when_finite(&[procurement_per_generation, generations], || {
            procurement_per_generation * generations
        }),
        total_launch_cost_million: when_finite(&[launch_campaign, generations], || {
            launch_campaign * generations
        }),
        average_procurement_unit_cost_million: average_procurement,
        average_launch_cost_million: average_launch,

        interceptor_dry_mass_kg: dry_mass,
        kill_vehicle_propellant_mass_kg: kv_propellant,
        interceptor_propellant_mass_kg: main_propellant,
        interceptor_mass_kg: total_mass,

        interceptors_per_threat: shots,
        interceptors_per_salvo,
        constellation_size,
        interceptor_replacements: generations,
        total_interceptors,
        interceptors_per_year,
        interceptors_per_launch,
        launch_count,
        payload_utilization_kg: payload_utilization,
        payload_utilization_percent,
        total_payload_to_orbit_kg: total_payload_to_orbit,

        composite_kill_probability_percent: attained_pk,
        requested_composite_kill_probability_percent: a.composite_kill_probability_percent,

        delta_v_margin_km_per_s: a.max_delta_v_km_per_s - a.divert_velocity_km_per_s,
        average_acceleration_g: a.average_acceleration_g,
        average_acceleration_m_s2: flyout.acceleration_m_s2,
        average_acceleration_km_s2: flyout.acceleration_km_s2,
        time_to_reach_max_velocity_seconds: flyout.time_to_max_velocity_s,
        interceptor_flyout_range_km: flyout.range_km,
        flyout_range_message: flyout.limit.map(|limit| limit.to_string()),
        coverage_radius_km: coverage_radius,
        earth_coverage_sq_km: earth_coverage,

        sbi_orbit_altitude_km: a.sbi_orbit_altitude_km,
        intercept_altitude_km: a.intercept_altitude_km,
        max_latitude_coverage_deg: a.max_latitude_coverage_deg,
        flyout_time_seconds: a.flyout_time_seconds,
        sbi_life_expectancy_years: a.sbi_life_expectancy_years,
        cost_estimate_period_years: a.cost_estimate_period_years,
    }
}

/// Interceptors needed on orbit so every point of the coverage zone sees
/// `salvo_size × shots` of them.
fn constellation_size(coverage_radius: f64, earth_coverage: f64, salvo_size: f64, shots: f64) -> f64 {
    if !(coverage_radius.is_finite()
        && coverage_radius > 0.0
        && earth_coverage.is_finite()
        && earth_coverage > 0.0)
    {
        return f64::NAN;
    }
    let footprint = std::f64::consts::PI * coverage_radius.powi(2);
    let raw = earth_coverage / footprint * salvo_size * shots;
    if raw.is_finite() && raw > 0.0 {
        raw.ceil().max(1.0)
    } else {
        f64::NAN
    }
}
