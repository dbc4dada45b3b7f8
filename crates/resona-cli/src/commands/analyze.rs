//! Room reverberation analysis command.

use clap::Args;
use resona_analysis::export::{
    export_band_trajectories_csv, export_resonance_profile_csv, export_spectrogram_csv,
    export_spectrogram_pgm, export_waveform_csv,
};
use resona_analysis::{Band, RoomAnalysis};
use resona_io::read_wav;
use std::path::PathBuf;

/// Dynamic range for the PGM spectrogram image.
const IMAGE_DB_RANGE: f32 = 80.0;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the report as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write the three band trajectories to a CSV file
    #[arg(long, value_name = "FILE")]
    bands: Option<PathBuf>,

    /// Write the spectrogram grid to a CSV file (dB scale)
    #[arg(long, value_name = "FILE")]
    spectrogram: Option<PathBuf>,

    /// Write the spectrogram to a PGM grayscale image
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Write the resonance profile (per-bin peak level) to a CSV file
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Write the raw waveform to a CSV file
    #[arg(long, value_name = "FILE")]
    waveform: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    println!("Analyzing {}...", args.input.display());

    let signal = read_wav(&args.input)?;
    println!(
        "  {} samples, {} Hz, {:.2}s",
        signal.len(),
        signal.sample_rate(),
        signal.duration()
    );

    let analysis = RoomAnalysis::analyze(signal);

    println!();
    println!(
        "Resonance frequency: {:.2} Hz",
        analysis.resonance_frequency()
    );

    println!();
    println!("Reverberation times:");
    println!("  Low  (100 Hz):  {:>6.2} s", analysis.rt60(Band::Low));
    println!("  Mid  (1k Hz):   {:>6.2} s", analysis.rt60(Band::Mid));
    println!("  High (5k Hz):   {:>6.2} s", analysis.rt60(Band::High));
    println!("  Average:        {:>6.2} s", analysis.rt60_average());
    println!("  Margin:         {:>6.2} s", analysis.rt60_margin());

    let [low_mid, mid_high, high_low] = analysis.rt60_differences();
    println!();
    println!("Band differences:");
    println!("  Low-Mid:   {:>6.2} s", low_mid);
    println!("  Mid-High:  {:>6.2} s", mid_high);
    println!("  High-Low:  {:>6.2} s", high_low);

    println!();
    println!("Decay markers:");
    println!(
        "  {:<5} {:>9} {:>11} {:>11}",
        "Band", "Peak (s)", "-5 dB (s)", "-25 dB (s)"
    );
    let times = analysis.time_axis();
    for band in Band::ALL {
        let decay = analysis.band_decay(band);
        let peak_t = times[decay.peak_index];
        let drop5_t = decay.drop5.first().map_or(peak_t, |&i| times[i]);
        let drop25_t = decay.drop25.first().map_or(peak_t, |&i| times[i]);
        println!(
            "  {:<5} {:>9.3} {:>11.3} {:>11.3}",
            band.name(),
            peak_t,
            drop5_t,
            drop25_t
        );
    }

    if let Some(path) = &args.json {
        let report = serde_json::json!({
            "file": args.input.display().to_string(),
            "sample_rate": analysis.signal().sample_rate(),
            "num_samples": analysis.signal().len(),
            "duration_secs": analysis.duration(),
            "resonance_hz": analysis.resonance_frequency(),
            "rt60_secs": {
                "low": analysis.rt60(Band::Low),
                "mid": analysis.rt60(Band::Mid),
                "high": analysis.rt60(Band::High),
                "average": analysis.rt60_average(),
                "margin": analysis.rt60_margin(),
            },
            "band_differences_secs": {
                "low_mid": low_mid,
                "mid_high": mid_high,
                "high_low": high_low,
            },
        });
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("\nWrote report to {}", path.display());
    }

    if let Some(path) = &args.bands {
        export_band_trajectories_csv(&analysis, path)?;
        println!("Wrote band trajectories to {}", path.display());
    }

    if let Some(path) = &args.spectrogram {
        export_spectrogram_csv(analysis.spectrogram(), path, true)?;
        println!("Wrote spectrogram to {}", path.display());
    }

    if let Some(path) = &args.image {
        export_spectrogram_pgm(analysis.spectrogram(), path, IMAGE_DB_RANGE)?;
        println!("Wrote spectrogram image to {}", path.display());
    }

    if let Some(path) = &args.profile {
        export_resonance_profile_csv(&analysis, path)?;
        println!("Wrote resonance profile to {}", path.display());
    }

    if let Some(path) = &args.waveform {
        export_waveform_csv(&analysis, path)?;
        println!("Wrote waveform to {}", path.display());
    }

    Ok(())
}
