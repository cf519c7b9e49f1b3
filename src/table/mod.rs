//! Delimited-text table input and output

pub mod reader;
pub mod writer;

pub use reader::{parse_dataset, read_dataset, Dataset, Observation, TableError};
pub use writer::write_table;
