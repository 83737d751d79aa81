//! Rocket-equation sizing, flyout kinematics and coverage geometry.
//!
//! All functions are total: inputs that make a quantity meaningless yield NaN
//! rather than an error, and NaN inputs propagate.

use std::f64::consts::PI;
use std::fmt;

/// Standard gravity in m/s², used for both the rocket equation and g-loads
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// Propellant needed to give `initial_mass_kg` a velocity change of
/// `delta_v_km_s` with a thruster of the given specific impulse.
///
/// `m_p = m_0 · (exp(Δv / (g₀ · Isp)) − 1)`
#[must_use]
pub fn propellant_mass(initial_mass_kg: f64, delta_v_km_s: f64, isp_seconds: f64) -> f64 {
    if !(initial_mass_kg >= 0.0 && isp_seconds > 0.0) {
        return f64::NAN;
    }
    let exponent = (delta_v_km_s * 1000.0) / (STANDARD_GRAVITY * isp_seconds);
    let mass_ratio = exponent.exp();
    if !mass_ratio.is_finite() {
        return f64::NAN;
    }
    initial_mass_kg * (mass_ratio - 1.0)
}

/// Why a flyout range could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyoutLimit {
    /// Max velocity is reached only after the flyout time has elapsed
    InsufficientAcceleration,
    /// Time to max velocity or the flyout time is not a finite number
    InvalidTiming,
}

impl fmt::Display for FlyoutLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlyoutLimit::InsufficientAcceleration => write!(
                f,
                "Acceleration is insufficient to reach the velocity specified over the flyout time specified."
            ),
            FlyoutLimit::InvalidTiming => write!(
                f,
                "Acceleration inputs result in an invalid time to max velocity."
            ),
        }
    }
}

/// Boost-then-coast flyout of one interceptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flyout {
    pub acceleration_m_s2: f64,
    pub acceleration_km_s2: f64,
    pub time_to_max_velocity_s: f64,
    pub range_km: f64,
    pub limit: Option<FlyoutLimit>,
}

impl Flyout {
    /// Constant acceleration up to `max_velocity_km_s`, then cruise until
    /// `flyout_time_s` runs out.
    #[must_use]
    pub fn compute(acceleration_g: f64, max_velocity_km_s: f64, flyout_time_s: f64) -> Self {
        let acceleration_m_s2 = acceleration_g * STANDARD_GRAVITY;
        let acceleration_km_s2 = acceleration_m_s2 / 1000.0;
        let time_to_max_velocity_s = if acceleration_km_s2 > 0.0 {
            max_velocity_km_s / acceleration_km_s2
        } else {
            f64::NAN
        };

        let (range_km, limit) = if !time_to_max_velocity_s.is_finite() || !flyout_time_s.is_finite()
        {
            (f64::NAN, Some(FlyoutLimit::InvalidTiming))
        } else if time_to_max_velocity_s > flyout_time_s {
            (f64::NAN, Some(FlyoutLimit::InsufficientAcceleration))
        } else {
            let boost = 0.5 * acceleration_km_s2 * time_to_max_velocity_s.powi(2);
            let cruise = max_velocity_km_s * (flyout_time_s - time_to_max_velocity_s);
            (boost + cruise, None)
        };

        Self {
            acceleration_m_s2,
            acceleration_km_s2,
            time_to_max_velocity_s,
            range_km,
            limit,
        }
    }
}

/// Ground-plane radius an interceptor parked at `orbit_altitude_km` can
/// defend at `intercept_altitude_km`.
///
/// NaN when the flyout range cannot span the altitude gap.
#[must_use]
pub fn coverage_radius_km(
    flyout_range_km: f64,
    orbit_altitude_km: f64,
    intercept_altitude_km: f64,
) -> f64 {
    let altitude_delta = orbit_altitude_km - intercept_altitude_km;
    let radicand = flyout_range_km.powi(2) - altitude_delta.powi(2);
    if radicand >= 0.0 {
        radicand.sqrt()
    } else {
        f64::NAN
    }
}

/// Area of the spherical zone between ±`max_latitude_deg` on a sphere of
/// radius `EARTH_RADIUS_KM + intercept_altitude_km`.
#[must_use]
pub fn earth_coverage_sq_km(intercept_altitude_km: f64, max_latitude_deg: f64) -> f64 {
    if !max_latitude_deg.is_finite() {
        return f64::NAN;
    }
    let radius = EARTH_RADIUS_KM + intercept_altitude_km;
    4.0 * PI * radius.powi(2) * max_latitude_deg.to_radians().sin()
}
