//! Gaussian interval and containment probability math
//!
//! The covariance is diagonal, so the containment probability of a 3D
//! observation factors into the product of three univariate interval
//! probabilities, one per axis.

use std::sync::LazyLock;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::cube::Cube;

/// Default uncertainty floor; overridable with `--epsilon`.
pub const DEFAULT_EPSILON: f64 = 1e-6;

static STD_NORMAL: LazyLock<Normal> =
    LazyLock::new(|| Normal::new(0.0, 1.0).expect("standard normal parameters are valid"));

/// Standard normal cumulative distribution function Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    STD_NORMAL.cdf(z)
}

/// P(lo ≤ X ≤ hi) for X ~ N(mean, sigma²).
///
/// Callers must guarantee `sigma > 0` (see [`sanitize`]). Inverted bounds
/// (`lo > hi`) are not rejected here; the result is then negative.
pub fn interval_probability(mean: f64, sigma: f64, lo: f64, hi: f64) -> f64 {
    normal_cdf((hi - mean) / sigma) - normal_cdf((lo - mean) / sigma)
}

/// A standard deviation after applying the epsilon floor policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sanitized {
    pub adjusted: f64,
    pub clamped: bool,
}

/// Floor a reported standard deviation to `epsilon`.
///
/// A zero or near-zero uncertainty makes the Gaussian degenerate (division
/// by zero in the standardized score), so any value comparing below the
/// floor is replaced by it. Idempotent.
pub fn sanitize(sigma: f64, epsilon: f64) -> Sanitized {
    if sigma < epsilon {
        Sanitized {
            adjusted: epsilon,
            clamped: true,
        }
    } else {
        Sanitized {
            adjusted: sigma,
            clamped: false,
        }
    }
}

/// Outcome of one containment evaluation: the probability plus which axes
/// needed their uncertainty floored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Containment {
    /// Probability in [0, 1] up to floating-point rounding.
    pub probability: f64,
    /// Clamp flags in x, y, z order.
    pub clamped: [bool; 3],
}

/// Probability that a 3D Gaussian observation's true location lies inside
/// the cube.
///
/// Pure and deterministic: sanitizes each axis sigma, evaluates the three
/// axis interval probabilities, and multiplies them.
pub fn containment_probability(
    position: [f64; 3],
    sigma: [f64; 3],
    cube: &Cube,
    epsilon: f64,
) -> Containment {
    let mut probability = 1.0;
    let mut clamped = [false; 3];

    for (axis, ((mean, s), (lo, hi))) in position
        .iter()
        .zip(&sigma)
        .zip(cube.axes())
        .enumerate()
    {
        let sanitized = sanitize(*s, epsilon);
        clamped[axis] = sanitized.clamped;
        probability *= interval_probability(*mean, sanitized.adjusted, lo, hi);
    }

    Containment {
        probability,
        clamped,
    }
}
