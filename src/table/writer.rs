//! Space-delimited output: a `#`-prefixed header line, then one line per row

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::core::process::ProcessedRow;

/// Write the augmented table: all original columns in order, then `p`.
///
/// The six coordinate fields use default float formatting; passthrough
/// fields are reproduced verbatim, unquoted.
pub fn write_table<W: Write>(
    mut out: W,
    columns: &[String],
    rows: &[ProcessedRow],
) -> csv::Result<()> {
    writeln!(out, "#{} p", columns.join(" "))?;

    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .quote_style(QuoteStyle::Never)
        .from_writer(out);

    for row in rows {
        let obs = &row.observation;
        let mut record: Vec<String> = Vec::with_capacity(columns.len() + 1);
        record.push(obs.x.to_string());
        record.push(obs.sigma_x.to_string());
        record.push(obs.y.to_string());
        record.push(obs.sigma_y.to_string());
        record.push(obs.z.to_string());
        record.push(obs.sigma_z.to_string());
        record.extend(obs.extra.iter().cloned());
        record.push(row.probability.to_string());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
