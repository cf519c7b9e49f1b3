//! Reader for whitespace/comma/tab-delimited observation tables
//!
//! Lines starting with `#` are comments. The first comment line, when it
//! precedes all data, declares column names; otherwise names are synthesized
//! as `col0, col1, …`. The first six columns are interpreted positionally as
//! x, error_x, y, error_y, z, error_z regardless of their names; columns
//! beyond the sixth are passthrough and reproduced verbatim on output.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

/// Errors reading or interpreting the input table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("row {row}: expected at least six numeric columns (x, error_x, y, error_y, z, error_z), found {found}")]
    TooFewColumns { row: usize, found: usize },

    #[error("row {row}, column {column}: '{value}' is not a number")]
    NotANumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("header declares {names} column names but the data has {columns} columns")]
    HeaderMismatch { names: usize, columns: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("input contains no data rows")]
    Empty,
}

/// One parsed input row: six required fields plus passthrough text
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub x: f64,
    pub sigma_x: f64,
    pub y: f64,
    pub sigma_y: f64,
    pub z: f64,
    pub sigma_z: f64,
    /// Columns beyond the sixth, verbatim.
    pub extra: Vec<String>,
}

impl Observation {
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn sigmas(&self) -> [f64; 3] {
        [self.sigma_x, self.sigma_y, self.sigma_z]
    }
}

/// A fully parsed input table
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Declared or synthesized column names, excluding the appended `p`.
    pub columns: Vec<String>,
    pub rows: Vec<Observation>,
    /// True when no header comment was present and names were synthesized.
    pub synthesized_columns: bool,
}

/// Split a data line on any run of commas, spaces, and tabs.
fn split_fields(line: &str) -> Vec<&str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect()
}

/// Parse the full input text into a typed dataset.
///
/// The schema is fixed at parse time: six required numeric fields plus
/// verbatim passthrough, never re-inferred downstream. Any row failing that
/// schema fails the whole run; there is no partial output.
pub fn parse_dataset(content: &str) -> Result<Dataset, TableError> {
    let mut header: Option<Vec<String>> = None;
    let mut rows: Vec<Observation> = Vec::new();
    let mut width = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix('#') {
            // Only the first comment line counts as a header, and only
            // when it appears ahead of any data.
            if header.is_none() && rows.is_empty() {
                header = Some(rest.split_whitespace().map(str::to_string).collect());
            }
            continue;
        }

        let fields = split_fields(trimmed);
        let row = rows.len() + 1;
        if fields.len() < 6 {
            return Err(TableError::TooFewColumns {
                row,
                found: fields.len(),
            });
        }
        if rows.is_empty() {
            width = fields.len();
        } else if fields.len() != width {
            return Err(TableError::RaggedRow {
                row,
                expected: width,
                found: fields.len(),
            });
        }

        let mut required = [0.0f64; 6];
        for (i, value) in fields[..6].iter().enumerate() {
            required[i] = value.parse().map_err(|_| TableError::NotANumber {
                row,
                column: i + 1,
                value: value.to_string(),
            })?;
        }
        let [x, sigma_x, y, sigma_y, z, sigma_z] = required;

        rows.push(Observation {
            x,
            sigma_x,
            y,
            sigma_y,
            z,
            sigma_z,
            extra: fields[6..].iter().map(|f| f.to_string()).collect(),
        });
    }

    if rows.is_empty() {
        return Err(TableError::Empty);
    }

    let (columns, synthesized_columns) = match header {
        Some(names) if !names.is_empty() => {
            if names.len() != width {
                return Err(TableError::HeaderMismatch {
                    names: names.len(),
                    columns: width,
                });
            }
            (names, false)
        }
        _ => ((0..width).map(|i| format!("col{i}")).collect(), true),
    };

    Ok(Dataset {
        columns,
        rows,
        synthesized_columns,
    })
}

/// Read the whole input (a file, or stdin when `path` is `None`) and parse it.
pub fn read_dataset(path: Option<&Path>) -> Result<Dataset, TableError> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_dataset(&content)
}
