//! Output metrics that can be plotted against a swept input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::MetricsReport;

/// Sweepable output metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricId {
    TotalSystemCostBillion,
    ConstellationSize,
    LaunchCount,
    InterceptorMassKg,
    InterceptorFlyoutRangeKm,
}

impl MetricId {
    pub const ALL: [MetricId; 5] = [
        MetricId::TotalSystemCostBillion,
        MetricId::ConstellationSize,
        MetricId::LaunchCount,
        MetricId::InterceptorMassKg,
        MetricId::InterceptorFlyoutRangeKm,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// Display label for selectors and legends
    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Label for the vertical chart axis, with units
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        self.spec().axis_label
    }

    /// Catalog entry for this metric
    #[must_use]
    pub fn spec(self) -> &'static MetricSpec {
        // METRICS is declared in the same order as `MetricId::ALL`
        &METRICS[self as usize]
    }

    /// Read this metric out of a report; NaN when unavailable
    #[must_use]
    pub fn value(self, report: &MetricsReport) -> f64 {
        match self {
            MetricId::TotalSystemCostBillion => report.total_system_cost_billion,
            MetricId::ConstellationSize => report.constellation_size,
            MetricId::LaunchCount => report.launch_count,
            MetricId::InterceptorMassKg => report.interceptor_mass_kg,
            MetricId::InterceptorFlyoutRangeKm => report.interceptor_flyout_range_km,
        }
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when text names no known metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric {:?}", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for MetricId {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}

/// Catalog entry describing one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSpec {
    pub id: MetricId,
    pub key: &'static str,
    pub label: &'static str,
    pub axis_label: &'static str,
}

/// The standard metric table, in `MetricId::ALL` order
pub static METRICS: [MetricSpec; 5] = [
    MetricSpec {
        id: MetricId::TotalSystemCostBillion,
        key: "totalSystemCostBillion",
        label: "Total system cost",
        axis_label: "Total system cost (USD billions)",
    },
    MetricSpec {
        id: MetricId::ConstellationSize,
        key: "constellationSize",
        label: "Constellation size",
        axis_label: "Constellation size (interceptors)",
    },
    MetricSpec {
        id: MetricId::LaunchCount,
        key: "launchCount",
        label: "# of launches required",
        axis_label: "Launches required",
    },
    MetricSpec {
        id: MetricId::InterceptorMassKg,
        key: "interceptorMassKg",
        label: "Interceptor mass",
        axis_label: "Interceptor mass (kg)",
    },
    MetricSpec {
        id: MetricId::InterceptorFlyoutRangeKm,
        key: "interceptorFlyoutRangeKm",
        label: "Interceptor flyout range",
        axis_label: "Interceptor flyout range (km)",
    },
];
