//! Learning-curve cost models.
//!
//! A learning rate `L` (e.g. 0.85) means each doubling of cumulative quantity
//! multiplies unit cost by `L`, so unit `k` costs `C₁ · k^b` with `b = log₂ L`.

/// Learning exponent `b = log₂(L)` for a learning percentage, or NaN when
/// the rate is not positive
#[must_use]
pub fn learning_exponent(learning_percent: f64) -> f64 {
    let rate = learning_percent / 100.0;
    if rate > 0.0 { rate.log2() } else { f64::NAN }
}

/// Cumulative-average unit cost of `quantity` units (Crawford closed form).
///
/// `C₁ · (Q^(1+b) + 1) / (Q · (1 + b))`
///
/// NaN when the quantity is not a positive number, the rate is not positive,
/// or `1 + b` is zero.
#[must_use]
pub fn crawford_average_cost(first_unit_cost: f64, learning_percent: f64, quantity: f64) -> f64 {
    if !(quantity.is_finite() && quantity > 0.0) {
        return f64::NAN;
    }
    let b = learning_exponent(learning_percent);
    let slope = 1.0 + b;
    if !b.is_finite() || slope == 0.0 {
        return f64::NAN;
    }
    first_unit_cost * ((quantity.powf(slope) + 1.0) / (quantity * slope))
}

/// Units summed term by term before switching to the Euler-Maclaurin tail
const EXACT_UNITS: u64 = 1_000;

/// Unit-by-unit total cost `Σ_{k=1..units} C₁ · k^b`.
///
/// Zero units cost nothing. A non-positive rate means no learning at all.
/// Past the first thousand units the remaining terms are summed in closed
/// form, which keeps very large production runs cheap to evaluate.
#[must_use]
pub fn cumulative_learning_cost(first_unit_cost: f64, learning_percent: f64, units: u64) -> f64 {
    if units == 0 {
        return 0.0;
    }
    let b = learning_exponent(learning_percent);
    if !b.is_finite() {
        return first_unit_cost * units as f64;
    }
    let head: f64 = (1..=units.min(EXACT_UNITS))
        .map(|unit| (unit as f64).powf(b))
        .sum();
    let tail = if units > EXACT_UNITS {
        power_sum_tail(b, EXACT_UNITS as f64, units as f64)
    } else {
        0.0
    };
    first_unit_cost * (head + tail)
}

/// `Σ_{k=m+1..n} k^b` by Euler-Maclaurin with two correction terms
fn power_sum_tail(b: f64, m: f64, n: f64) -> f64 {
    let integral = if (b + 1.0).abs() < f64::EPSILON {
        (n / m).ln()
    } else {
        (n.powf(b + 1.0) - m.powf(b + 1.0)) / (b + 1.0)
    };
    let endpoints = (n.powf(b) - m.powf(b)) / 2.0;
    let slope = b * (n.powf(b - 1.0) - m.powf(b - 1.0)) / 12.0;
    integral + endpoints + slope
}
