//! Core computation: cube geometry and Gaussian containment math

pub mod cube;
pub mod gaussian;
pub mod process;

pub use cube::Cube;
pub use gaussian::{
    containment_probability, interval_probability, normal_cdf, sanitize, Containment, Sanitized,
    DEFAULT_EPSILON,
};
pub use process::{process, ProcessedRow};
