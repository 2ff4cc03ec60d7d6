//! Initial-condition profiles sampled from scalar parameters.
//!
//! The remote solvers take initial state as plain sample arrays; these
//! constructors are the only place those arrays are synthesized.

use crate::error::{CoreResult, DomainError};
use crate::numeric::ensure_positive;
use std::f64::consts::PI;

/// Half sine wave over the domain: `sin(pi * x / L)` sampled at
/// `x = i / (num_points - 1) * L`.
///
/// Both endpoints land on zeros of the sine (the second one up to floating
/// rounding), matching fixed-boundary initial states.
pub fn sine_profile(num_points: usize, domain_length: f64) -> CoreResult<Vec<f64>> {
    if num_points < 2 {
        return Err(DomainError::DegenerateGrid { num_points });
    }
    let length = ensure_positive(domain_length, "domain length")?;
    Ok((0..num_points)
        .map(|i| {
            let x = i as f64 / (num_points - 1) as f64 * length;
            (PI * x / length).sin()
        })
        .collect())
}

/// `num_points` copies of `value`.
pub fn constant_profile(num_points: usize, value: f64) -> Vec<f64> {
    vec![value; num_points]
}
