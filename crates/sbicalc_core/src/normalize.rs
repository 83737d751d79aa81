//! Text-to-number conversion and input validation.
//!
//! [`normalize`] never stops at the first problem: every rule is checked and
//! every violation is collected so the caller can show them all at once.

use crate::catalog::Field;
use crate::error::{ValidationError, ValidationErrors};
use crate::model::{Assumptions, RawInputs};

/// Lowest intercept altitude the model accepts, in km
pub const MIN_INTERCEPT_ALTITUDE_KM: f64 = 50.0;

/// Parse one raw input.
///
/// Surrounding whitespace and thousands separators are ignored. Anything that
/// is not an optionally signed decimal numeral (no exponent, no `inf`/`NaN`
/// words) parses to NaN, as does empty text.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if !is_decimal_numeral(&cleaned) {
        return f64::NAN;
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

fn is_decimal_numeral(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(whole.is_empty() && fraction.is_empty()) && all_digits(whole) && all_digits(fraction)
}

/// Result of normalizing a raw input set
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Parsed and rounded values. Fields that failed to parse are NaN.
    pub assumptions: Assumptions,
    pub errors: ValidationErrors,
}

impl Normalized {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The assumptions when every rule passed, otherwise all violations
    pub fn into_result(self) -> Result<Assumptions, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.assumptions)
        } else {
            Err(self.errors)
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse and validate raw textual inputs.
///
/// Keys missing from `raw` are treated as empty text.
#[must_use]
pub fn normalize(raw: &RawInputs) -> Normalized {
    let mut a = Assumptions::from_fn(|field| {
        raw.get(field.key())
            .map_or(f64::NAN, |text| parse_number(text))
    });
    let mut errors = ValidationErrors::new();

    require_positive(&mut errors, Field::SbiOrbitAltitudeKm, a.sbi_orbit_altitude_km);
    require_positive(&mut errors, Field::AverageAccelerationG, a.average_acceleration_g);
    require_positive(&mut errors, Field::MaxDeltaVKmPerS, a.max_delta_v_km_per_s);

    if !non_negative(a.divert_velocity_km_per_s) {
        errors.push(ValidationError::Negative(Field::DivertVelocityKmPerS));
    } else if a.divert_velocity_km_per_s > a.max_delta_v_km_per_s {
        errors.push(ValidationError::DivertExceedsDeltaV);
    }

    require_positive(&mut errors, Field::ThrusterIspSeconds, a.thruster_isp_seconds);
    require_positive(&mut errors, Field::KillVehicleDryMassKg, a.kill_vehicle_dry_mass_kg);
    require_positive(
        &mut errors,
        Field::InterceptorBodyDryMassKg,
        a.interceptor_body_dry_mass_kg,
    );
    require_positive(
        &mut errors,
        Field::SupportModuleDryMassKg,
        a.support_module_dry_mass_kg,
    );

    for field in [
        Field::KillProbabilityPercent,
        Field::CompositeKillProbabilityPercent,
    ] {
        let percent = a.get(field);
        if !percent.is_finite() {
            errors.push(ValidationError::NotANumber(field));
        } else if percent <= 0.0 || percent >= 100.0 {
            errors.push(ValidationError::OutOfRange(field));
        }
    }

    if require_positive(
        &mut errors,
        Field::SbiLifeExpectancyYears,
        a.sbi_life_expectancy_years,
    ) {
        a.sbi_life_expectancy_years = a.sbi_life_expectancy_years.round().max(1.0);
    }

    if require_positive(&mut errors, Field::SalvoSize, a.salvo_size) {
        a.salvo_size = a.salvo_size.round().max(1.0);
    }

    if !a.intercept_altitude_km.is_finite() {
        errors.push(ValidationError::NotANumber(Field::InterceptAltitudeKm));
    } else if a.intercept_altitude_km < MIN_INTERCEPT_ALTITUDE_KM {
        errors.push(ValidationError::InterceptBelowMinimum);
    } else if a.intercept_altitude_km > a.sbi_orbit_altitude_km {
        errors.push(ValidationError::InterceptAboveOrbit);
    }

    if !a.max_latitude_coverage_deg.is_finite() {
        errors.push(ValidationError::NotANumber(Field::MaxLatitudeCoverageDeg));
    } else if !(0.0..=90.0).contains(&a.max_latitude_coverage_deg) {
        errors.push(ValidationError::OutOfRange(Field::MaxLatitudeCoverageDeg));
    }

    require_positive(&mut errors, Field::FlyoutTimeSeconds, a.flyout_time_seconds);

    if !non_negative(a.non_recurring_dev_cost_million) {
        errors.push(ValidationError::Negative(Field::NonRecurringDevCostMillion));
    }

    require_positive(
        &mut errors,
        Field::FirstUnitInterceptorCostMillion,
        a.first_unit_interceptor_cost_million,
    );
    check_learning_percent(&mut errors, Field::InterceptorLearningPercent, &a);

    if !non_negative(a.operating_support_cost_per_year_million) {
        errors.push(ValidationError::Negative(
            Field::OperatingSupportCostPerYearMillion,
        ));
    }

    if require_positive(
        &mut errors,
        Field::CostEstimatePeriodYears,
        a.cost_estimate_period_years,
    ) {
        a.cost_estimate_period_years = a.cost_estimate_period_years.round().max(1.0);
    }

    require_positive(
        &mut errors,
        Field::PayloadCapacityPerVehicleKg,
        a.payload_capacity_per_vehicle_kg,
    );
    require_positive(
        &mut errors,
        Field::FirstUnitLaunchCostMillion,
        a.first_unit_launch_cost_million,
    );
    check_learning_percent(&mut errors, Field::LaunchLearningPercent, &a);

    a.kill_vehicle_dry_mass_kg = round_to_tenth(a.kill_vehicle_dry_mass_kg);
    a.interceptor_body_dry_mass_kg = round_to_tenth(a.interceptor_body_dry_mass_kg);
    a.support_module_dry_mass_kg = round_to_tenth(a.support_module_dry_mass_kg);

    Normalized {
        assumptions: a,
        errors,
    }
}

/// Record a violation unless `value` is strictly positive; returns whether it passed
fn require_positive(errors: &mut ValidationErrors, field: Field, value: f64) -> bool {
    let ok = positive(value);
    if !ok {
        errors.push(ValidationError::NotPositive(field));
    }
    ok
}

fn check_learning_percent(errors: &mut ValidationErrors, field: Field, a: &Assumptions) {
    let percent = a.get(field);
    if !percent.is_finite() {
        errors.push(ValidationError::NotANumber(field));
    } else if !(70.0..=100.0).contains(&percent) {
        errors.push(ValidationError::OutOfRange(field));
    }
}
