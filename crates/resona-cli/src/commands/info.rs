//! Display WAV file metadata.

use clap::Args;
use resona_analysis::{FFT_SIZE, HOP_SIZE};
use resona_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:         {}", args.file.display());
    println!("Format:       {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:     {}", info.channels);
    println!("Sample rate:  {} Hz", info.sample_rate);
    println!(
        "Duration:     {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("Size:         {}", format_bytes(file_size));

    // What the analyzer would see for this file.
    let samples = info.num_frames as usize;
    let stft_frames = if samples < FFT_SIZE {
        1
    } else {
        (samples - FFT_SIZE) / HOP_SIZE + 1
    };
    let bin_width = info.sample_rate as f32 / FFT_SIZE as f32;
    println!(
        "Spectrogram:  {} frames, {:.2} Hz bin width",
        stft_frames, bin_width
    );

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
