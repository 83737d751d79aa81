//! Space-based interceptor constellation sizing and cost library
//!
//! This crate turns a small set of engineering and cost assumptions into a
//! sizing and lifecycle-cost estimate for a constellation of space-based
//! interceptors (SBIs), and sweeps any single input across a range to show
//! how an output metric responds.
//!
//! It covers:
//! - Input normalization (text parsing, validation, rounding)
//! - Two-stage propellant sizing with the rocket equation
//! - Flyout kinematics and spherical-cap coverage geometry
//! - Constellation sizing, replenishment and launch packing
//! - Learning-curve cost rollup across replacement generations
//! - One-dimensional sensitivity sweeps with nearest-sample lookup
//!
//! # Example
//!
//! ```ignore
//! use sbicalc_core::{Catalog, MetricId, SweepRequest, evaluate, normalize, sweep, locate};
//!
//! let normalized = normalize(&raw_inputs);
//! let assumptions = normalized.into_result()?;
//! let report = evaluate(&assumptions);
//!
//! let request = SweepRequest::new("maxDeltaVKmPerS", MetricId::InterceptorMassKg, "4", "10");
//! let result = sweep(&Catalog::standard(), Some(&assumptions), &request)?;
//! let nearest = locate(&result.points, 7.25);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod evaluate;
pub mod learning;
pub mod normalize;
pub mod persist;
pub mod propulsion;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod catalog;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{
    AxisDomain, MetricId, MetricSpec, SamplePoint, SweepLimits, SweepRequest, SweepResult,
    default_range, locate, sweep,
};
pub use catalog::{Catalog, Field, FieldSpec, Section};
pub use error::{SweepError, ValidationError, ValidationErrors};
pub use evaluate::evaluate;
pub use model::{Assumptions, MetricsReport, RawInputs};
pub use normalize::{Normalized, normalize, parse_number};
