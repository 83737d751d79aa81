//! Nearest-sample lookup over an x-ordered series.

use super::SamplePoint;

/// Index of the sample whose `x` is closest to `probe_x`.
///
/// `points` must be sorted by strictly increasing `x`. Probes before the
/// first sample resolve to index 0 and probes past the last sample resolve to
/// the last index. When the probe sits exactly halfway between two samples
/// the lower index wins. Returns `None` only for an empty series.
#[must_use]
pub fn locate(points: &[SamplePoint], probe_x: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }

    // Binary search keeping `low` as the insertion point and `high` one below it
    let mut low: usize = 0;
    let mut high: isize = points.len() as isize - 1;
    while low as isize <= high {
        let mid = (low + high as usize) / 2;
        let x = points[mid].x;
        if x == probe_x {
            return Some(mid);
        }
        if x < probe_x {
            low = mid + 1;
        } else {
            high = mid as isize - 1;
        }
    }

    if low >= points.len() {
        return Some(points.len() - 1);
    }
    if high < 0 {
        return Some(0);
    }

    let high = high as usize;
    let below = (points[high].x - probe_x).abs();
    let above = (points[low].x - probe_x).abs();
    Some(if above < below { low } else { high })
}
