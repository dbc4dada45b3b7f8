//! Audio file ingestion for the Resona room acoustics analyzer.
//!
//! This crate provides:
//!
//! - **WAV loading**: [`read_wav`] decodes a file into a ready-to-analyze
//!   [`resona_analysis::AudioSignal`], normalizing integer PCM and mixing
//!   multi-channel recordings down to mono
//! - **Metadata**: [`read_wav_info`] reads header details without touching
//!   the sample data
//! - **WAV writing**: [`write_wav`] saves generated test signals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resona_io::read_wav;
//! use resona_analysis::RoomAnalysis;
//!
//! let signal = read_wav("clap.wav")?;
//! let analysis = RoomAnalysis::analyze(signal);
//! println!("RT60 Avg: {:.2} s", analysis.rt60_average());
//! ```

mod wav;

pub use wav::{WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, write_wav};

/// Error types for audio file operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The decoded audio cannot form a valid analysis signal.
    #[error("invalid audio data: {0}")]
    Signal(#[from] resona_analysis::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio file operations.
pub type Result<T> = std::result::Result<T, Error>;
