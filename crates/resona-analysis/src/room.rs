//! Whole-recording room analysis.
//!
//! [`RoomAnalysis`] runs the full pipeline once over a signal and holds
//! every derived product together: time axis, spectrogram, the three
//! band trajectories with their decay estimates, and the resonance. The
//! bundle is immutable, so readers can never see a half-updated mix of
//! results from two different recordings.
//!
//! [`RoomAnalyzer`] is the session wrapper around it: load a recording,
//! probe results by band name, load the next recording.

use crate::bands::{Band, band_trajectory};
use crate::decay::{DecayEstimate, estimate_decay};
use crate::scan::row_from_flat_index;
use crate::signal::AudioSignal;
use crate::spectrogram::Spectrogram;

/// Frequency of the loudest cell in the whole power grid.
///
/// The grid is scanned flat in frequency-major order (every frame of bin
/// 0, then bin 1, and so on) and the first maximum wins, so ties resolve
/// toward lower frequencies and earlier frames. The winning flat index is
/// folded back to its frequency row.
pub fn locate_resonance(spectrogram: &Spectrogram) -> f32 {
    let mut best = f32::NEG_INFINITY;
    let mut best_flat = 0;
    let mut flat = 0;

    for row in spectrogram.rows() {
        for &value in row {
            if value > best {
                best = value;
                best_flat = flat;
            }
            flat += 1;
        }
    }

    let row = row_from_flat_index(best_flat, spectrogram.num_frames());
    spectrogram.freqs()[row]
}

/// Complete analysis products for one recording.
#[derive(Debug, Clone)]
pub struct RoomAnalysis {
    signal: AudioSignal,
    time_axis: Vec<f32>,
    spectrogram: Spectrogram,
    trajectories: [Vec<f32>; 3],
    decays: [DecayEstimate; 3],
    resonance_hz: f32,
}

impl RoomAnalysis {
    /// Run the full pipeline over a signal.
    ///
    /// Computes the spectrogram, extracts each band trajectory on the
    /// signal's own time axis, estimates each band's decay, and locates
    /// the resonance.
    pub fn analyze(signal: AudioSignal) -> Self {
        let time_axis = signal.time_axis();
        let duration = signal.duration();
        let spectrogram = Spectrogram::compute(&signal);

        let trajectories =
            Band::ALL.map(|band| band_trajectory(&spectrogram, band, duration, &time_axis));
        let decays = Band::ALL.map(|band| estimate_decay(&trajectories[band as usize], &time_axis));
        let resonance_hz = locate_resonance(&spectrogram);

        tracing::debug!(
            "analyzed {} samples at {} Hz: {} frames, resonance {:.2} Hz",
            signal.len(),
            signal.sample_rate(),
            spectrogram.num_frames(),
            resonance_hz
        );

        Self {
            signal,
            time_axis,
            spectrogram,
            trajectories,
            decays,
            resonance_hz,
        }
    }

    /// The analyzed signal.
    pub fn signal(&self) -> &AudioSignal {
        &self.signal
    }

    /// Raw waveform samples, for plotting against [`Self::time_axis`].
    pub fn samples(&self) -> &[f32] {
        self.signal.samples()
    }

    /// Per-sample time axis in seconds.
    pub fn time_axis(&self) -> &[f32] {
        &self.time_axis
    }

    /// Recording length in seconds.
    pub fn duration(&self) -> f32 {
        self.signal.duration()
    }

    /// The computed power spectrogram.
    pub fn spectrogram(&self) -> &Spectrogram {
        &self.spectrogram
    }

    /// Dominant frequency of the recording in Hz.
    pub fn resonance_frequency(&self) -> f32 {
        self.resonance_hz
    }

    /// A band's dB trajectory, one value per signal sample.
    pub fn band_trajectory(&self, band: Band) -> &[f32] {
        &self.trajectories[band as usize]
    }

    /// A band's decay estimate, including the crossing index sets.
    pub fn band_decay(&self, band: Band) -> &DecayEstimate {
        &self.decays[band as usize]
    }

    /// A band's RT60 in seconds.
    pub fn rt60(&self, band: Band) -> f32 {
        self.decays[band as usize].rt60
    }

    /// Mean RT60 across the three bands.
    pub fn rt60_average(&self) -> f32 {
        let sum: f32 = Band::ALL.iter().map(|&band| self.rt60(band)).sum();
        sum / Band::ALL.len() as f32
    }

    /// How far the average RT60 sits above the half-second comfort level.
    /// Negative when the room decays faster than that.
    pub fn rt60_margin(&self) -> f32 {
        self.rt60_average() - 0.5
    }

    /// Pairwise RT60 spreads `[Mid - Low, High - Mid, Low - High]`.
    pub fn rt60_differences(&self) -> [f32; 3] {
        let low = self.rt60(Band::Low);
        let mid = self.rt60(Band::Mid);
        let high = self.rt60(Band::High);
        [mid - low, high - mid, low - high]
    }

    /// Per-bin peak level in dB across all frames, aligned with the
    /// spectrogram's frequency axis. Bins that never carry energy come
    /// out as negative infinity.
    pub fn resonance_profile(&self) -> Vec<f32> {
        self.spectrogram
            .peak_magnitude_per_bin()
            .iter()
            .map(|&m| 10.0 * m.log10())
            .collect()
    }
}

/// Analysis session holding at most one recording's results.
///
/// Loading a new recording recomputes everything and replaces the whole
/// bundle in one assignment. Probes take band names as strings and answer
/// `None` both for unknown names and when nothing is loaded.
#[derive(Debug, Default)]
pub struct RoomAnalyzer {
    current: Option<RoomAnalysis>,
}

impl RoomAnalyzer {
    /// Empty session.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Analyze a recording and make it the session's current one.
    pub fn load(&mut self, signal: AudioSignal) {
        self.current = Some(RoomAnalysis::analyze(signal));
    }

    /// Whether a recording has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// The current analysis bundle, if any.
    pub fn analysis(&self) -> Option<&RoomAnalysis> {
        self.current.as_ref()
    }

    /// Duration of the current recording in seconds.
    pub fn duration(&self) -> Option<f32> {
        self.current.as_ref().map(RoomAnalysis::duration)
    }

    /// Resonance of the current recording in Hz.
    pub fn resonance_frequency(&self) -> Option<f32> {
        self.current.as_ref().map(RoomAnalysis::resonance_frequency)
    }

    /// Trajectory probe by band name (`"Low"`, `"Mid"`, `"High"`).
    pub fn band_trajectory(&self, name: &str) -> Option<&[f32]> {
        let Some(band) = Band::from_name(name) else {
            tracing::warn!("unknown frequency band '{name}'");
            return None;
        };
        self.current
            .as_ref()
            .map(|analysis| analysis.band_trajectory(band))
    }

    /// RT60 probe by band name; also accepts `"Avg"` for the band mean.
    pub fn rt60(&self, name: &str) -> Option<f32> {
        if name == "Avg" {
            return self.current.as_ref().map(RoomAnalysis::rt60_average);
        }
        let Some(band) = Band::from_name(name) else {
            tracing::warn!("unknown frequency band '{name}'");
            return None;
        };
        self.current.as_ref().map(|analysis| analysis.rt60(band))
    }
}
