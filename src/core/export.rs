//! CSV export of the assignment forecast.

use crate::domain::model::Assignment;
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

/// Writes the forecast as CSV (`date,weekday,name`) to `writer`.
pub fn write_forecast_csv<W: Write>(writer: W, forecast: &[Assignment]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["date", "weekday", "name"])?;
    for assignment in forecast {
        csv_writer.write_record([
            assignment.date.format("%Y-%m-%d").to_string(),
            assignment.date.format("%A").to_string(),
            assignment.name.clone(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the forecast CSV to a file, creating parent directories as needed.
pub fn export_forecast<P: AsRef<Path>>(path: P, forecast: &[Assignment]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(&path)?;
    write_forecast_csv(file, forecast)?;
    tracing::debug!("Forecast exported to {}", path.as_ref().display());
    Ok(())
}
