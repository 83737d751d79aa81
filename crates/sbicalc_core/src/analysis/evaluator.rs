//! Sweep execution: repeated scenario evaluation across one input's range.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::{Catalog, FieldSpec};
use crate::error::SweepError;
use crate::evaluate::evaluate;
use crate::model::{Assumptions, MetricsReport};
use crate::normalize::parse_number;

use super::{MetricId, SweepRequest};

/// Largest magnitude below which every integer is exactly representable (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// One evaluated sample of a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePoint {
    /// Swept input value
    pub x: f64,
    /// Selected metric at `x`; always finite
    pub y: f64,
    pub metrics: MetricsReport,
}

/// Closed interval on one chart axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    fn of(values: impl Iterator<Item = f64>) -> Self {
        values.fold(
            Self {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |domain, v| Self {
                min: domain.min.min(v),
                max: domain.max.max(v),
            },
        )
    }
}

/// A successful sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Key of the swept field
    pub field: &'static str,
    pub metric: MetricId,
    /// Samples in strictly increasing `x` order; never empty
    pub points: Vec<SamplePoint>,
    /// Field step between samples
    pub step: f64,
    /// Decimal places of the swept field
    pub decimals: u32,
    /// Samples dropped because the metric was unavailable
    pub skipped: usize,
    pub warning: Option<String>,
    /// Observed extent of the samples
    pub x_range: AxisDomain,
    pub y_range: AxisDomain,
    /// Padded chart extent. The vertical floor is pinned at zero, which
    /// assumes a non-negative metric.
    pub x_domain: AxisDomain,
    pub y_domain: AxisDomain,
}

impl SweepResult {
    /// The sample nearest `probe_x`
    #[must_use]
    pub fn nearest(&self, probe_x: f64) -> Option<&SamplePoint> {
        super::locate(&self.points, probe_x).map(|i| &self.points[i])
    }
}

/// Sweep one field of `baseline` across the requested range.
///
/// Preconditions are checked in a fixed order and the first one violated is
/// returned. Samples whose metric is unavailable are skipped and counted.
pub fn sweep(
    catalog: &Catalog,
    baseline: Option<&Assumptions>,
    request: &SweepRequest,
) -> Result<SweepResult, SweepError> {
    let spec = catalog
        .field(&request.field)
        .ok_or_else(|| SweepError::UnknownField(request.field.clone()))?;

    // Endpoints are stepped as integers in units of the field precision, so
    // they must stay within the range where f64 holds integers exactly
    let decimals = spec.decimals();
    let scale = 10f64.powi(decimals as i32);
    let start = parse_number(&request.range_start);
    let end = parse_number(&request.range_end);
    let representable = |value: f64| (value * scale).round().abs() <= MAX_EXACT_INTEGER;
    if !representable(start) || !representable(end) {
        return Err(SweepError::NonNumericRange);
    }
    if start > end {
        return Err(SweepError::InvertedRange);
    }
    if let Some(min) = spec.min.filter(|min| start < *min) {
        return Err(SweepError::StartBelowMinimum { min });
    }
    if let Some(max) = spec.max.filter(|max| end > *max) {
        return Err(SweepError::EndAboveMaximum { max });
    }
    let baseline = baseline.ok_or(SweepError::MissingBaseline)?;

    // Step in scaled integers so repeated addition cannot drift
    let step = spec.step_value();
    let scaled_start = (start * scale).round() as i64;
    let scaled_end = (end * scale).round() as i64;
    let scaled_step = ((step * scale).round() as i64).max(1);
    let step_count = (scaled_end - scaled_start).max(0) / scaled_step;

    let limits = request.limits;
    if step_count > limits.max_steps {
        return Err(SweepError::StepCap {
            steps: step_count,
            cap: limits.max_steps,
        });
    }
    if step_count + 1 > limits.max_points {
        return Err(SweepError::PointCap {
            points: step_count + 1,
            cap: limits.max_points,
        });
    }

    let tolerance = (scaled_step as f64 * 0.25).round() as i64;
    let guard = usize::try_from(limits.max_points.saturating_mul(2)).unwrap_or(usize::MAX);
    let xs: Vec<f64> = std::iter::successors(Some(scaled_start), |value| value.checked_add(scaled_step))
        .take_while(|value| *value <= scaled_end + tolerance)
        .take(guard.saturating_add(1))
        .map(|value| value as f64 / scale)
        .collect();

    let samples = evaluate_samples(baseline, spec, request.metric, &xs);

    let mut points = Vec::with_capacity(samples.len());
    let mut skipped = 0;
    for (x, y, metrics) in samples {
        if y.is_finite() {
            points.push(SamplePoint { x, y, metrics });
        } else {
            skipped += 1;
        }
    }

    if points.is_empty() {
        return Err(SweepError::NoValidPoints);
    }

    let warning = (skipped > 0).then(|| {
        format!(
            "{skipped} point{} were skipped because the metric could not be calculated.",
            if skipped == 1 { "" } else { "s" }
        )
    });

    let x_range = AxisDomain::of(points.iter().map(|p| p.x));
    let y_range = AxisDomain::of(points.iter().map(|p| p.y));

    Ok(SweepResult {
        field: spec.key,
        metric: request.metric,
        step,
        decimals,
        skipped,
        warning,
        x_domain: pad_x(x_range),
        y_domain: pad_y(y_range),
        x_range,
        y_range,
        points,
    })
}

/// Evaluate every x, returning results in input order
fn evaluate_samples(
    baseline: &Assumptions,
    spec: &FieldSpec,
    metric: MetricId,
    xs: &[f64],
) -> Vec<(f64, f64, MetricsReport)> {
    let sample = |x: &f64| {
        let metrics = evaluate(&baseline.with(spec.field, *x));
        (*x, metric.value(&metrics), metrics)
    };

    #[cfg(feature = "parallel")]
    let samples = xs.par_iter().map(sample).collect();

    #[cfg(not(feature = "parallel"))]
    let samples = xs.iter().map(sample).collect();

    samples
}

fn pad_x(range: AxisDomain) -> AxisDomain {
    let mut pad = range.span() * 0.05;
    if pad == 0.0 {
        pad = range.max.abs().max(1.0) * 0.05;
    }
    AxisDomain {
        min: range.min - pad,
        max: range.max + pad,
    }
}

fn pad_y(range: AxisDomain) -> AxisDomain {
    let top = range.max.max(0.0);
    let mut pad = top * 0.1;
    if pad == 0.0 {
        pad = 1.0;
    }
    AxisDomain {
        min: 0.0,
        max: top + pad,
    }
}

/// Suggested sweep range for a field: the baseline value ±50 steps, kept
/// inside the field's bounds and rounded to its precision.
///
/// Falls back to the catalog default when the baseline value is missing.
#[must_use]
pub fn default_range(spec: &FieldSpec, baseline: Option<&Assumptions>) -> (f64, f64) {
    let step = spec.step_value();
    let center = baseline
        .map(|a| a.get(spec.field))
        .filter(|v| v.is_finite())
        .unwrap_or_else(|| parse_number(spec.default_value));
    let min = spec.min.unwrap_or(f64::NEG_INFINITY);
    let max = spec.max.unwrap_or(f64::INFINITY);

    let (mut start, mut end) = if center.is_finite() {
        (center - step * 50.0, center + step * 50.0)
    } else {
        (min, max)
    };
    start = start.max(min);
    end = end.min(max);

    if !(start.is_finite() && end.is_finite()) || start >= end {
        start = spec.min.unwrap_or(center);
        end = spec.max.unwrap_or(start + step * 10.0);
    }
    if start >= end {
        end = start + step * 10.0;
    }

    (spec.quantize(start), spec.quantize(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Field;

    #[test]
    fn test_default_range_centers_on_baseline() {
        let baseline = Assumptions::default();
        let spec = Field::MaxDeltaVKmPerS.spec();
        // 6.0 ± 5.0, clamped below at nothing
        assert_eq!(default_range(spec, Some(&baseline)), (1.0, 11.0));
    }

    #[test]
    fn test_default_range_clamps_to_bounds() {
        let baseline = Assumptions::default();
        // 1 ± 50, min 1
        assert_eq!(
            default_range(Field::SalvoSize.spec(), Some(&baseline)),
            (1.0, 51.0)
        );
        // 90 ± 50, max 90
        assert_eq!(
            default_range(Field::MaxLatitudeCoverageDeg.spec(), Some(&baseline)),
            (40.0, 90.0)
        );
    }

    #[test]
    fn test_default_range_without_baseline_uses_catalog_default() {
        let spec = Field::ThrusterIspSeconds.spec();
        assert_eq!(default_range(spec, None), (190.0, 290.0));
    }

    #[test]
    fn test_default_range_degenerate_baseline() {
        // Baseline above the max collapses the clamped range; fall back to bounds
        let baseline = Assumptions::default().with(Field::MaxLatitudeCoverageDeg, 500.0);
        assert_eq!(
            default_range(Field::MaxLatitudeCoverageDeg.spec(), Some(&baseline)),
            (1.0, 90.0)
        );
    }

    #[test]
    fn test_y_domain_floor_is_zero() {
        let domain = pad_y(AxisDomain { min: 5.0, max: 10.0 });
        assert_eq!(domain.min, 0.0);
        assert!((domain.max - 11.0).abs() < 1e-12);
        assert_eq!(pad_y(AxisDomain { min: 0.0, max: 0.0 }).max, 1.0);
    }

    #[test]
    fn test_x_domain_zero_span() {
        let domain = pad_x(AxisDomain { min: 4.0, max: 4.0 });
        assert!((domain.min - 3.8).abs() < 1e-12);
        assert!((domain.max - 4.2).abs() < 1e-12);
    }
}
