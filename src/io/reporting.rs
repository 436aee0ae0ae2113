// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use crate::simulation::engine::PeriodRecord;

/// Writes one simulation's per-period history to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `history` - The per-period records of one simulation run.
pub fn write_simulation_log(file_path: &str, history: &[PeriodRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut writer = csv::Writer::from_path(path)?;

    for record in history {
        writer.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    writer.flush()?;

    Ok(())
}
