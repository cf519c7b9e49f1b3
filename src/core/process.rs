//! Row processor: one linear pass over the dataset

use crate::core::cube::Cube;
use crate::core::gaussian::containment_probability;
use crate::table::{Dataset, Observation};

/// One observation with its containment probability appended
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRow {
    pub observation: Observation,
    pub probability: f64,
    /// Axes (x, y, z order) whose uncertainty was floored.
    pub clamped: [bool; 3],
}

/// Compute containment probabilities for every observation, in input order.
///
/// Output row i derives only from input row i; the only shared state is the
/// read-only cube and the epsilon policy passed by parameter.
pub fn process(dataset: &Dataset, cube: &Cube, epsilon: f64) -> Vec<ProcessedRow> {
    dataset
        .rows
        .iter()
        .map(|obs| {
            let result = containment_probability(obs.position(), obs.sigmas(), cube, epsilon);
            ProcessedRow {
                observation: obs.clone(),
                probability: result.probability,
                clamped: result.clamped,
            }
        })
        .collect()
}
