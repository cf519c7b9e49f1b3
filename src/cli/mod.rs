//! CLI surface and run orchestration

use std::io;
use std::path::PathBuf;

use clap::Parser;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::cube::Cube;
use crate::core::gaussian::DEFAULT_EPSILON;
use crate::core::process::process;
use crate::table::{reader, writer};

/// Containment probabilities for 3D Gaussian observations inside an
/// axis-aligned cube.
///
/// Each input row is an independent trivariate normal observation; the
/// output repeats the row with the containment probability appended as a
/// final `p` column.
#[derive(Parser, Debug)]
#[command(name = "cubeprob", version, about)]
pub struct Cli {
    /// Input file; standard input when omitted.
    ///
    /// Expected row format: [x error_x y error_y z error_z [others...]]
    pub infile: Option<PathBuf>,

    /// Cube limits: "x_min,x_max,y_min,y_max,z_min,z_max"
    #[arg(short = 'l', value_name = "LIMITS", allow_hyphen_values = true)]
    pub limits: Cube,

    /// Show additional processing information (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Minimum allowed standard deviation; smaller values are floored
    #[arg(long, value_name = "SIGMA", default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,
}

pub fn run(cli: Cli) -> Result<()> {
    let source = cli
        .infile
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    if cli.verbose >= 1 {
        eprintln!("Working on input: {source}");
    }
    if cli.verbose >= 2 {
        let c = &cli.limits;
        eprintln!(
            "Cube: x [{}, {}] y [{}, {}] z [{}, {}], epsilon {}",
            c.x_min, c.x_max, c.y_min, c.y_max, c.z_min, c.z_max, cli.epsilon
        );
    }

    let dataset = reader::read_dataset(cli.infile.as_deref()).into_diagnostic()?;

    if dataset.synthesized_columns && cli.verbose >= 1 {
        eprintln!(
            "{} no column names found, using default names",
            style("warning:").yellow().bold()
        );
    }

    let rows = process(&dataset, &cli.limits, cli.epsilon);

    if cli.verbose >= 1 {
        for (i, row) in rows.iter().enumerate() {
            for (axis, &clamped) in ["x", "y", "z"].iter().zip(&row.clamped) {
                if clamped {
                    eprintln!(
                        "{} row {i}: {axis} uncertainty below {} floored to avoid a singular Gaussian",
                        style("warning:").yellow().bold(),
                        cli.epsilon
                    );
                }
            }
        }
    }

    let stdout = io::stdout().lock();
    writer::write_table(stdout, &dataset.columns, &rows).into_diagnostic()?;

    if cli.verbose >= 2 {
        eprintln!("Processed {} observations", rows.len());
    }

    Ok(())
}
