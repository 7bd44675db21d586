use std::fs::File;
use std::io::Write;
use std::path::Path;

use alb_audit_core::{ExportRow, EXPORT_COLUMNS};
use anyhow::{Context, Result};
use csv::Writer;

/// Write export rows as CSV, header first. Returns the number of data rows.
pub fn write_csv<W: Write>(rows: &[ExportRow], out: W) -> Result<usize> {
    let mut writer = Writer::from_writer(out);
    writer
        .write_record(EXPORT_COLUMNS)
        .context("failed to write CSV header")?;
    for row in rows {
        writer
            .write_record(row.to_record())
            .context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(rows.len())
}

/// Create `path` and write export rows to it.
pub fn export_csv(path: &Path, rows: &[ExportRow]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("failed to create CSV file {}", path.display()))?;
    let count = write_csv(rows, file)?;
    log::info!("exported {count} rows to {}", path.display());
    Ok(count)
}
