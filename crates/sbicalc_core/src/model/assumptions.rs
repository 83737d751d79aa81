//! The numeric assumption record fed to the scenario calculator.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Field;

/// Raw textual inputs keyed by field key (e.g. `"salvoSize" -> "12"`)
pub type RawInputs = FxHashMap<String, String>;

/// Validated engineering and cost assumptions.
///
/// Values are plain `f64` so that an unparsed or missing input can travel as
/// NaN until the normalizer reports it. Records are never mutated in place by
/// the engine; [`Assumptions::with`] returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    // Interceptor performance
    pub sbi_orbit_altitude_km: f64,
    pub average_acceleration_g: f64,
    pub max_delta_v_km_per_s: f64,
    pub divert_velocity_km_per_s: f64,
    pub thruster_isp_seconds: f64,
    pub kill_vehicle_dry_mass_kg: f64,
    pub interceptor_body_dry_mass_kg: f64,
    pub support_module_dry_mass_kg: f64,
    pub sbi_life_expectancy_years: f64,
    pub kill_probability_percent: f64,
    pub composite_kill_probability_percent: f64,

    // Threat parameters
    pub salvo_size: f64,
    pub intercept_altitude_km: f64,
    pub max_latitude_coverage_deg: f64,
    pub flyout_time_seconds: f64,

    // Cost parameters
    pub non_recurring_dev_cost_million: f64,
    pub first_unit_interceptor_cost_million: f64,
    pub interceptor_learning_percent: f64,
    pub operating_support_cost_per_year_million: f64,
    pub cost_estimate_period_years: f64,

    // Launch parameters
    pub payload_capacity_per_vehicle_kg: f64,
    pub first_unit_launch_cost_million: f64,
    pub launch_learning_percent: f64,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            sbi_orbit_altitude_km: 300.0,
            average_acceleration_g: 15.0,
            max_delta_v_km_per_s: 6.0,
            divert_velocity_km_per_s: 2.5,
            thruster_isp_seconds: 240.0,
            kill_vehicle_dry_mass_kg: 25.0,
            interceptor_body_dry_mass_kg: 25.0,
            support_module_dry_mass_kg: 50.0,
            sbi_life_expectancy_years: 5.0,
            kill_probability_percent: 80.0,
            composite_kill_probability_percent: 96.0,
            salvo_size: 1.0,
            intercept_altitude_km: 200.0,
            max_latitude_coverage_deg: 90.0,
            flyout_time_seconds: 120.0,
            non_recurring_dev_cost_million: 7000.0,
            first_unit_interceptor_cost_million: 70.0,
            interceptor_learning_percent: 85.0,
            operating_support_cost_per_year_million: 450.0,
            cost_estimate_period_years: 20.0,
            payload_capacity_per_vehicle_kg: 45000.0,
            first_unit_launch_cost_million: 150.0,
            launch_learning_percent: 95.0,
        }
    }
}

impl Assumptions {
    /// A record with every field unavailable
    #[must_use]
    pub fn unavailable() -> Self {
        Self::from_fn(|_| f64::NAN)
    }

    /// Build a record by computing each field's value
    pub fn from_fn(mut value_of: impl FnMut(Field) -> f64) -> Self {
        let mut assumptions = Self::default();
        for field in Field::ALL {
            *assumptions.slot_mut(field) = value_of(field);
        }
        assumptions
    }

    /// Read one field
    #[must_use]
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::SbiOrbitAltitudeKm => self.sbi_orbit_altitude_km,
            Field::AverageAccelerationG => self.average_acceleration_g,
            Field::MaxDeltaVKmPerS => self.max_delta_v_km_per_s,
            Field::DivertVelocityKmPerS => self.divert_velocity_km_per_s,
            Field::ThrusterIspSeconds => self.thruster_isp_seconds,
            Field::KillVehicleDryMassKg => self.kill_vehicle_dry_mass_kg,
            Field::InterceptorBodyDryMassKg => self.interceptor_body_dry_mass_kg,
            Field::SupportModuleDryMassKg => self.support_module_dry_mass_kg,
            Field::SbiLifeExpectancyYears => self.sbi_life_expectancy_years,
            Field::KillProbabilityPercent => self.kill_probability_percent,
            Field::CompositeKillProbabilityPercent => self.composite_kill_probability_percent,
            Field::SalvoSize => self.salvo_size,
            Field::InterceptAltitudeKm => self.intercept_altitude_km,
            Field::MaxLatitudeCoverageDeg => self.max_latitude_coverage_deg,
            Field::FlyoutTimeSeconds => self.flyout_time_seconds,
            Field::NonRecurringDevCostMillion => self.non_recurring_dev_cost_million,
            Field::FirstUnitInterceptorCostMillion => self.first_unit_interceptor_cost_million,
            Field::InterceptorLearningPercent => self.interceptor_learning_percent,
            Field::OperatingSupportCostPerYearMillion => {
                self.operating_support_cost_per_year_million
            }
            Field::CostEstimatePeriodYears => self.cost_estimate_period_years,
            Field::PayloadCapacityPerVehicleKg => self.payload_capacity_per_vehicle_kg,
            Field::FirstUnitLaunchCostMillion => self.first_unit_launch_cost_million,
            Field::LaunchLearningPercent => self.launch_learning_percent,
        }
    }

    /// Copy of this record with one field overridden
    #[must_use]
    pub fn with(&self, field: Field, value: f64) -> Self {
        let mut modified = *self;
        *modified.slot_mut(field) = value;
        modified
    }

    fn slot_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::SbiOrbitAltitudeKm => &mut self.sbi_orbit_altitude_km,
            Field::AverageAccelerationG => &mut self.average_acceleration_g,
            Field::MaxDeltaVKmPerS => &mut self.max_delta_v_km_per_s,
            Field::DivertVelocityKmPerS => &mut self.divert_velocity_km_per_s,
            Field::ThrusterIspSeconds => &mut self.thruster_isp_seconds,
            Field::KillVehicleDryMassKg => &mut self.kill_vehicle_dry_mass_kg,
            Field::InterceptorBodyDryMassKg => &mut self.interceptor_body_dry_mass_kg,
            Field::SupportModuleDryMassKg => &mut self.support_module_dry_mass_kg,
            Field::SbiLifeExpectancyYears => &mut self.sbi_life_expectancy_years,
            Field::KillProbabilityPercent => &mut self.kill_probability_percent,
            Field::CompositeKillProbabilityPercent => &mut self.composite_kill_probability_percent,
            Field::SalvoSize => &mut self.salvo_size,
            Field::InterceptAltitudeKm => &mut self.intercept_altitude_km,
            Field::MaxLatitudeCoverageDeg => &mut self.max_latitude_coverage_deg,
            Field::FlyoutTimeSeconds => &mut self.flyout_time_seconds,
            Field::NonRecurringDevCostMillion => &mut self.non_recurring_dev_cost_million,
            Field::FirstUnitInterceptorCostMillion => {
                &mut self.first_unit_interceptor_cost_million
            }
            Field::InterceptorLearningPercent => &mut self.interceptor_learning_percent,
            Field::OperatingSupportCostPerYearMillion => {
                &mut self.operating_support_cost_per_year_million
            }
            Field::CostEstimatePeriodYears => &mut self.cost_estimate_period_years,
            Field::PayloadCapacityPerVehicleKg => &mut self.payload_capacity_per_vehicle_kg,
            Field::FirstUnitLaunchCostMillion => &mut self.first_unit_launch_cost_million,
            Field::LaunchLearningPercent => &mut self.launch_learning_percent,
        }
    }
}
