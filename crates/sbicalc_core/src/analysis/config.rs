//! Configuration types for one-dimensional sensitivity sweeps.

use serde::{Deserialize, Serialize};

use super::MetricId;

/// Most steps a single sweep may take
pub const MAX_SWEEP_STEPS: i64 = 500;

/// Most samples a single sweep may produce
pub const MAX_CHART_POINTS: i64 = 3000;

/// Work bounds for a single sweep call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepLimits {
    pub max_steps: i64,
    pub max_points: i64,
}

impl Default for SweepLimits {
    fn default() -> Self {
        Self {
            max_steps: MAX_SWEEP_STEPS,
            max_points: MAX_CHART_POINTS,
        }
    }
}

/// Which input to vary, which output to record, and over what range.
///
/// Range endpoints stay as text until the sweep parses them, so a caller can
/// hand over whatever the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRequest {
    /// Key of the swept field (e.g. `maxDeltaVKmPerS`)
    pub field: String,
    pub metric: MetricId,
    pub range_start: String,
    pub range_end: String,
    #[serde(default)]
    pub limits: SweepLimits,
}

impl SweepRequest {
    pub fn new(
        field: impl Into<String>,
        metric: MetricId,
        range_start: impl Into<String>,
        range_end: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            metric,
            range_start: range_start.into(),
            range_end: range_end.into(),
            limits: SweepLimits::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SweepLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Default for SweepRequest {
    /// Interceptor mass against max velocity over 4..10 km/s
    fn default() -> Self {
        Self::new("maxDeltaVKmPerS", MetricId::InterceptorMassKg, "4", "10")
    }
}
