//! cubeprob: containment probabilities for 3D Gaussian observations
//!
//! Each input row is modeled as an independent trivariate normal with
//! diagonal covariance. The probability that its true location lies inside
//! an axis-aligned cube therefore factors into the product of three
//! univariate interval probabilities, evaluated with the standard normal
//! CDF.

pub mod cli;
pub mod core;
pub mod table;
