//! Export formats for analysis results.
//!
//! Provides interoperability with spreadsheet and plotting tools:
//! - CSV for the waveform, band trajectories, and resonance profile
//! - CSV and PGM for the spectrogram grid

use crate::{Band, RoomAnalysis, Spectrogram};
use std::io::Write;
use std::path::Path;

/// Export the three band trajectories to CSV.
///
/// One row per signal sample: `time_s,low_db,mid_db,high_db`. Silent
/// stretches export as `-inf`, matching the trajectory values.
///
/// # Example
///
/// ```rust,ignore
/// use resona_analysis::{RoomAnalysis, export::export_band_trajectories_csv};
///
/// let analysis = RoomAnalysis::analyze(signal);
/// export_band_trajectories_csv(&analysis, "bands.csv")?;
/// ```
pub fn export_band_trajectories_csv(
    analysis: &RoomAnalysis,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "time_s,low_db,mid_db,high_db")?;

    let times = analysis.time_axis();
    let low = analysis.band_trajectory(Band::Low);
    let mid = analysis.band_trajectory(Band::Mid);
    let high = analysis.band_trajectory(Band::High);

    for i in 0..times.len() {
        writeln!(
            file,
            "{:.6},{:.6},{:.6},{:.6}",
            times[i], low[i], mid[i], high[i]
        )?;
    }

    Ok(())
}

/// Export the raw waveform to CSV as `time_s,amplitude` rows.
pub fn export_waveform_csv(analysis: &RoomAnalysis, path: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "time_s,amplitude")?;

    let times = analysis.time_axis();
    let samples = analysis.samples();
    for i in 0..times.len() {
        writeln!(file, "{:.6},{:.6}", times[i], samples[i])?;
    }

    Ok(())
}

/// Export the resonance profile (per-bin peak level) to CSV as
/// `freq_hz,peak_db` rows.
pub fn export_resonance_profile_csv(
    analysis: &RoomAnalysis,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    writeln!(file, "freq_hz,peak_db")?;

    let freqs = analysis.spectrogram().freqs();
    let profile = analysis.resonance_profile();
    for i in 0..freqs.len() {
        writeln!(file, "{:.2},{:.6}", freqs[i], profile[i])?;
    }

    Ok(())
}

/// Export a spectrogram to CSV format.
///
/// Creates a CSV file with time on rows and frequency bins on columns.
/// First row contains frequency labels, first column contains time labels.
///
/// # Arguments
/// * `spectrogram` - The spectrogram to export
/// * `path` - Output file path
/// * `db_scale` - If true, convert power densities to dB
pub fn export_spectrogram_csv(
    spectrogram: &Spectrogram,
    path: impl AsRef<Path>,
    db_scale: bool,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    // Header row with frequencies
    write!(file, "time_s")?;
    for &freq in spectrogram.freqs() {
        write!(file, ",{:.2}", freq)?;
    }
    writeln!(file)?;

    // Data rows; the grid is frequency-major, so each row gathers one
    // frame column across all bins.
    for (frame, &time) in spectrogram.frame_times().iter().enumerate() {
        write!(file, "{:.6}", time)?;

        for bin in 0..spectrogram.num_bins() {
            let mag = spectrogram.magnitude(bin, frame).unwrap_or(0.0);
            let value = if db_scale {
                10.0 * mag.max(1e-10).log10()
            } else {
                mag
            };
            write!(file, ",{:.6}", value)?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export a spectrogram to PGM grayscale image format.
///
/// PGM is a simple ASCII image format that can be viewed by most image
/// tools. Time is on the X axis, frequency on Y axis (low frequencies at
/// bottom).
///
/// # Arguments
///
/// * `spectrogram` - The spectrogram to export
/// * `path` - Output file path
/// * `db_range` - Dynamic range in dB (values below max-db_range map to black)
pub fn export_spectrogram_pgm(
    spectrogram: &Spectrogram,
    path: impl AsRef<Path>,
    db_range: f32,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    let width = spectrogram.num_frames();
    let height = spectrogram.num_bins();

    // PGM header
    writeln!(file, "P2")?;
    writeln!(file, "# Spectrogram export from resona-analysis")?;
    writeln!(file, "# Width: {} frames, Height: {} bins", width, height)?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;

    // Find max density for normalization
    let mut max_mag = 0.0f32;
    for row in spectrogram.rows() {
        for &mag in row {
            max_mag = max_mag.max(mag);
        }
    }
    let max_db = 10.0 * max_mag.max(1e-10).log10();

    // Image data (top to bottom = high to low frequency)
    for bin in (0..height).rev() {
        let mut row = Vec::with_capacity(width);
        for frame in 0..width {
            let mag = spectrogram.magnitude(bin, frame).unwrap_or(0.0);
            let db = 10.0 * mag.max(1e-10).log10();

            // Normalize to 0-255
            let normalized = ((db - (max_db - db_range)) / db_range).clamp(0.0, 1.0);
            let pixel = (normalized * 255.0) as u8;
            row.push(pixel);
        }

        for (i, &pixel) in row.iter().enumerate() {
            if i > 0 {
                write!(file, " ")?;
            }
            write!(file, "{}", pixel)?;
        }
        writeln!(file)?;
    }

    Ok(())
}
