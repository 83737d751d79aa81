//! Scenario outputs.

use serde::Serialize;

/// Returns true when a computed quantity can be displayed or plotted.
///
/// Unavailable quantities are NaN; presentation layers show them as `--`.
#[inline]
#[must_use]
pub fn is_available(value: f64) -> bool {
    value.is_finite()
}

/// Everything the scenario calculator derives from one assumption set.
///
/// Every numeric field is either a finite value or NaN ("unavailable"). A NaN
/// precursor always makes its dependents NaN; nothing silently falls back to
/// zero. Costs are in constant millions of USD unless the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    // Cost rollup
    pub total_system_cost_million: f64,
    pub total_system_cost_billion: f64,
    pub non_recurring_million: f64,
    /// Unit-by-unit learning-curve cost of every interceptor procured over
    /// the estimate period, without generation resets
    pub production_cost_million: f64,
    pub operations_cost_million: f64,
    /// Launch cost of deploying one generation
    pub launch_campaign_cost_million: f64,
    /// Procurement across all replacement generations
    pub total_procurement_cost_million: f64,
    /// Launch cost across all replacement generations
    pub total_launch_cost_million: f64,
    pub average_procurement_unit_cost_million: f64,
    pub average_launch_cost_million: f64,

    // Mass
    pub interceptor_dry_mass_kg: f64,
    pub kill_vehicle_propellant_mass_kg: f64,
    pub interceptor_propellant_mass_kg: f64,
    pub interceptor_mass_kg: f64,

    // Sizing
    pub interceptors_per_threat: f64,
    pub interceptors_per_salvo: f64,
    pub constellation_size: f64,
    pub interceptor_replacements: f64,
    pub total_interceptors: f64,
    pub interceptors_per_year: f64,
    pub interceptors_per_launch: f64,
    pub launch_count: f64,
    pub payload_utilization_kg: f64,
    pub payload_utilization_percent: f64,
    pub total_payload_to_orbit_kg: f64,

    // Kill probability
    /// Composite Pk actually achieved with a whole number of shots
    pub composite_kill_probability_percent: f64,
    pub requested_composite_kill_probability_percent: f64,

    // Kinematics and coverage
    pub delta_v_margin_km_per_s: f64,
    pub average_acceleration_g: f64,
    pub average_acceleration_m_s2: f64,
    pub average_acceleration_km_s2: f64,
    pub time_to_reach_max_velocity_seconds: f64,
    pub interceptor_flyout_range_km: f64,
    /// Why the flyout range is unavailable, when it is
    pub flyout_range_message: Option<String>,
    pub coverage_radius_km: f64,
    pub earth_coverage_sq_km: f64,

    // Input echoes for report rendering
    pub sbi_orbit_altitude_km: f64,
    pub intercept_altitude_km: f64,
    pub max_latitude_coverage_deg: f64,
    pub flyout_time_seconds: f64,
    pub sbi_life_expectancy_years: f64,
    pub cost_estimate_period_years: f64,
}

impl MetricsReport {
    /// Named numeric quantities in report order.
    #[must_use]
    pub fn quantities(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("totalSystemCostMillion", self.total_system_cost_million),
            ("totalSystemCostBillion", self.total_system_cost_billion),
            ("nonRecurringMillion", self.non_recurring_million),
            ("productionCostMillion", self.production_cost_million),
            ("operationsCostMillion", self.operations_cost_million),
            ("launchCampaignCostMillion", self.launch_campaign_cost_million),
            ("totalProcurementCostMillion", self.total_procurement_cost_million),
            ("totalLaunchCostMillion", self.total_launch_cost_million),
            (
                "averageProcurementUnitCostMillion",
                self.average_procurement_unit_cost_million,
            ),
            ("averageLaunchCostMillion", self.average_launch_cost_million),
            ("interceptorDryMassKg", self.interceptor_dry_mass_kg),
            ("killVehiclePropellantMassKg", self.kill_vehicle_propellant_mass_kg),
            ("interceptorPropellantMassKg", self.interceptor_propellant_mass_kg),
            ("interceptorMassKg", self.interceptor_mass_kg),
            ("interceptorsPerThreat", self.interceptors_per_threat),
            ("interceptorsPerSalvo", self.interceptors_per_salvo),
            ("constellationSize", self.constellation_size),
            ("interceptorReplacements", self.interceptor_replacements),
            ("totalInterceptors", self.total_interceptors),
            ("interceptorsPerYear", self.interceptors_per_year),
            ("interceptorsPerLaunch", self.interceptors_per_launch),
            ("launchCount", self.launch_count),
            ("payloadUtilizationKg", self.payload_utilization_kg),
            ("payloadUtilizationPercent", self.payload_utilization_percent),
            ("totalPayloadToOrbitKg", self.total_payload_to_orbit_kg),
            (
                "compositeKillProbabilityPercent",
                self.composite_kill_probability_percent,
            ),
            (
                "requestedCompositeKillProbabilityPercent",
                self.requested_composite_kill_probability_percent,
            ),
            ("deltaVMarginKmPerS", self.delta_v_margin_km_per_s),
            ("averageAccelerationG", self.average_acceleration_g),
            ("averageAccelerationMS2", self.average_acceleration_m_s2),
            ("averageAccelerationKmPerS2", self.average_acceleration_km_s2),
            (
                "timeToReachMaxVelocitySeconds",
                self.time_to_reach_max_velocity_seconds,
            ),
            ("interceptorFlyoutRangeKm", self.interceptor_flyout_range_km),
            ("coverageRadiusKm", self.coverage_radius_km),
            ("earthCoverageSqKm", self.earth_coverage_sq_km),
            ("sbiOrbitAltitudeKm", self.sbi_orbit_altitude_km),
            ("interceptAltitudeKm", self.intercept_altitude_km),
            ("maxLatitudeCoverageDeg", self.max_latitude_coverage_deg),
            ("flyoutTimeSeconds", self.flyout_time_seconds),
            ("sbiLifeExpectancyYears", self.sbi_life_expectancy_years),
            ("costEstimatePeriodYears", self.cost_estimate_period_years),
        ]
    }

    /// Keys of quantities that could not be computed
    #[must_use]
    pub fn unavailable(&self) -> Vec<&'static str> {
        self.quantities()
            .into_iter()
            .filter(|(_, value)| !is_available(*value))
            .map(|(key, _)| key)
            .collect()
    }
}
