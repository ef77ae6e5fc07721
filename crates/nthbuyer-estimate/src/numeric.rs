//! Numeric helpers shared by the estimators.

/// Floor used wherever a rate or interval ends up in a denominator.
pub const EPSILON: f64 = 1e-9;

/// Restricts `value` to `[low, high]`.
#[must_use]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    low.max(high.min(value))
}

/// Rounds to the given number of decimals, to nearest with exact ties to even.
///
/// Ties are decided on the exact binary value, so `140.625` rounds to
/// `140.62` while `2.675` (stored just below the tie) rounds to `2.67`.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    // Exact remainder of the product, so `scaled + residual == value * factor`.
    let residual = value.mul_add(factor, -scaled);

    let rounded = if scaled - scaled.floor() == 0.5 {
        if residual > 0.0 {
            scaled.ceil()
        } else if residual < 0.0 {
            scaled.floor()
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    rounded / factor
}

/// Rounds minutes, rates and money for emission.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Rounds probabilities for emission.
#[must_use]
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

/// Divides by `denominator`, never by less than [`EPSILON`].
#[must_use]
pub fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(EPSILON)
}

/// Chance that a winner arrives within `wait` when one arrives uniformly
/// somewhere in an interval of length `interval`.
#[must_use]
pub fn uniform_probability(interval: f64, wait: f64) -> f64 {
    if interval <= 0.0 {
        return 1.0;
    }
    clamp(wait / interval, 0.0, 1.0)
}

/// Wait by which an exponential gap with the given mean has ended with
/// probability `q`.
#[must_use]
pub fn exponential_quantile(mean: f64, q: f64) -> f64 {
    -mean * (1.0 - q).ln()
}

/// Probability that an exponential gap with the given mean ends within `wait`.
#[must_use]
pub fn exponential_cdf(mean: f64, wait: f64) -> f64 {
    if mean <= 0.0 {
        return 1.0;
    }
    1.0 - (-wait / mean).exp()
}
