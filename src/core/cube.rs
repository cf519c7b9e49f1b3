//! Axis-aligned cube bounds parsed from the `-l` limits literal

use std::str::FromStr;
use thiserror::Error;

/// Axis-aligned rectangular cube the observations are tested against.
///
/// Constructed once per run from the `-l` limits literal and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

/// Errors parsing the `-l` limits literal
#[derive(Debug, Error)]
pub enum CubeParseError {
    #[error("expected six comma-separated values (x_min,x_max,y_min,y_max,z_min,z_max), got {0}")]
    WrongCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{axis} bounds are inverted: min {min} is greater than max {max}")]
    InvertedBounds { axis: char, min: f64, max: f64 },
}

impl Cube {
    /// Per-axis `(min, max)` intervals in x, y, z order.
    pub fn axes(&self) -> [(f64, f64); 3] {
        [
            (self.x_min, self.x_max),
            (self.y_min, self.y_max),
            (self.z_min, self.z_max),
        ]
    }
}

impl FromStr for Cube {
    type Err = CubeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 6 {
            return Err(CubeParseError::WrongCount(parts.len()));
        }

        let mut bounds = [0.0f64; 6];
        for (bound, part) in bounds.iter_mut().zip(&parts) {
            *bound = part
                .parse()
                .map_err(|_| CubeParseError::NotANumber(part.to_string()))?;
        }
        let [x_min, x_max, y_min, y_max, z_min, z_max] = bounds;

        for (axis, min, max) in [('x', x_min, x_max), ('y', y_min, y_max), ('z', z_min, z_max)] {
            if min > max {
                return Err(CubeParseError::InvertedBounds { axis, min, max });
            }
        }

        Ok(Cube {
            x_min,
            x_max,
            y_min,
            y_max,
            z_min,
            z_max,
        })
    }
}
