//! CSV export for analysis results.

use crate::response::FrequencyResponse;
use std::io::Write;
use std::path::Path;

/// Write a frequency response as CSV.
///
/// Columns: `frequency_hz,magnitude_db` plus `phase_deg` when the
/// response carries phase data.
pub fn write_response_csv(
    response: &FrequencyResponse,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    match &response.phase_deg {
        Some(phase) => {
            writeln!(file, "frequency_hz,magnitude_db,phase_deg")?;
            for i in 0..response.frequencies.len() {
                writeln!(
                    file,
                    "{:.6},{:.6},{:.6}",
                    response.frequencies[i], response.magnitude_db[i], phase[i]
                )?;
            }
        }
        None => {
            writeln!(file, "frequency_hz,magnitude_db")?;
            for i in 0..response.frequencies.len() {
                writeln!(
                    file,
                    "{:.6},{:.6}",
                    response.frequencies[i], response.magnitude_db[i]
                )?;
            }
        }
    }

    Ok(())
}

/// Write an input/output waveform comparison as CSV.
///
/// Columns: `time_s,input,output`. The two signals must have equal length.
pub fn write_waveform_csv(
    sample_rate: f64,
    input: &[f64],
    output: &[f64],
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    debug_assert_eq!(input.len(), output.len());

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "time_s,input,output")?;
    for (i, (x, y)) in input.iter().zip(output.iter()).enumerate() {
        writeln!(file, "{:.8},{:.8},{:.8}", i as f64 / sample_rate, x, y)?;
    }

    Ok(())
}
