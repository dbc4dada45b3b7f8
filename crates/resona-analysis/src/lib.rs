//! Resona Analysis - room reverberation measurement from recorded audio
//!
//! This crate turns a mono recording into the numbers behind a room
//! acoustics report:
//!
//! - [`signal`] - validated mono signal with its per-sample time axis
//! - [`fft`] - FFT wrapper and the Hann analysis window
//! - [`spectrogram`] - fixed-parameter power spectrogram
//! - [`bands`] - Low/Mid/High dB trajectories
//! - [`decay`] - RT60 estimation from a trajectory
//! - [`scan`] - first-match scan primitives shared by the stages
//! - [`room`] - whole-recording analysis session
//! - [`export`] - CSV and PGM outputs
//!
//! ## Example Workflow
//!
//! ```rust,ignore
//! use resona_analysis::{AudioSignal, Band, RoomAnalysis};
//!
//! // 1. Load a recording (resona-io reads WAV files)
//! let signal = AudioSignal::new(samples, 44100)?;
//!
//! // 2. Run the full pipeline
//! let analysis = RoomAnalysis::analyze(signal);
//!
//! // 3. Read the results
//! println!("Resonance: {:.2} Hz", analysis.resonance_frequency());
//! for band in Band::ALL {
//!     println!("RT60 {}: {:.2} s", band.name(), analysis.rt60(band));
//! }
//! println!("RT60 Avg: {:.2} s", analysis.rt60_average());
//! ```
//!
//! ## Session Use
//!
//! ```rust,ignore
//! use resona_analysis::RoomAnalyzer;
//!
//! let mut analyzer = RoomAnalyzer::new();
//! analyzer.load(signal);
//!
//! // Probe results by band name; unknown names answer None
//! let rt60_low = analyzer.rt60("Low");
//! let rt60_avg = analyzer.rt60("Avg");
//! ```

pub mod bands;
pub mod decay;
pub mod export;
pub mod fft;
pub mod room;
pub mod scan;
pub mod signal;
pub mod spectrogram;

// Re-export main types
pub use bands::{Band, band_trajectory, resolve_bin_frequency};
pub use decay::{DecayEstimate, estimate_decay};
pub use fft::{Fft, hann_window};
pub use room::{RoomAnalysis, RoomAnalyzer, locate_resonance};
pub use signal::AudioSignal;
pub use spectrogram::{FFT_SIZE, HOP_SIZE, NUM_BINS, OVERLAP, Spectrogram};

/// Error types for analysis input validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A signal must hold at least one sample.
    #[error("signal contains no samples")]
    EmptySignal,

    /// A signal's sample rate must be positive.
    #[error("sample rate must be positive")]
    InvalidSampleRate,

    /// Spectrogram axes and grid disagree on shape.
    #[error("spectrogram shape mismatch: {rows}x{cols} grid against {bins} bins and {frames} frames")]
    ShapeMismatch {
        rows: usize,
        bins: usize,
        cols: usize,
        frames: usize,
    },
}

/// Convenience result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
