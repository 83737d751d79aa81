//! Integration tests for the sbicalc engine
//!
//! Tests are organized by topic:
//! - `normalize` - Raw text parsing, validation rules and rounding
//! - `scenario` - Reference scenario and stage-by-stage degradation
//! - `sweep` - Sweep preconditions, caps, skipping and ordering
//! - `properties` - Seeded randomized checks over valid assumption sets

mod properties;
mod scenario;

use crate::model::RawInputs;
use crate::persist::default_inputs;

/// Catalog defaults with the given keys replaced
pub(crate) fn inputs_with(overrides: &[(&str, &str)]) -> RawInputs {
    let mut raw = default_inputs();
    for (key, value) in overrides {
        raw.insert((*key).to_string(), (*value).to_string());
    }
    raw
}

pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
