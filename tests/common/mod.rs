//! Shared test helpers for integration tests

#![allow(dead_code)]

use std::io::Write;

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::NamedTempFile;

/// Helper to get a cubeprob command
pub fn cubeprob() -> Command {
    Command::new(cargo::cargo_bin!("cubeprob"))
}

/// Write input content to a temp file for positional-infile tests
pub fn input_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
