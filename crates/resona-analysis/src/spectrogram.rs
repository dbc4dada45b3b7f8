//! Power spectrogram over a fixed short-time transform.
//!
//! The transform parameters are pinned: 1024-point FFT, 128-sample overlap
//! (896-sample hop), symmetric Hann window, one-sided power spectral
//! density rows. Band resolution and peak location downstream depend on
//! these exact bin and frame placements, so they are constants rather
//! than configuration.

use crate::fft::{Fft, hann_window};
use crate::signal::AudioSignal;
use crate::{Error, Result};

/// Transform length in samples.
pub const FFT_SIZE: usize = 1024;
/// Samples shared between consecutive frames.
pub const OVERLAP: usize = 128;
/// Stride between frame starts.
pub const HOP_SIZE: usize = FFT_SIZE - OVERLAP;
/// One-sided bin count, DC through Nyquist.
pub const NUM_BINS: usize = FFT_SIZE / 2 + 1;

/// Frequency-major power grid with its bin and frame axes.
///
/// `data[bin][frame]` holds one-sided power spectral density. Rows are
/// indexed by frequency so a flat scan over the grid walks each bin's
/// full frame sequence before moving up in frequency.
#[derive(Debug, Clone)]
pub struct Spectrogram {
    data: Vec<Vec<f32>>,
    freqs: Vec<f32>,
    frame_times: Vec<f32>,
    sample_rate: f32,
}

impl Spectrogram {
    /// Assemble a spectrogram from pre-built axes and grid, checking that
    /// their shapes agree.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] when the row count differs from the
    /// frequency axis or any row's length differs from the time axis.
    pub fn from_parts(
        freqs: Vec<f32>,
        frame_times: Vec<f32>,
        data: Vec<Vec<f32>>,
        sample_rate: f32,
    ) -> Result<Self> {
        if data.len() != freqs.len() {
            return Err(Error::ShapeMismatch {
                rows: data.len(),
                bins: freqs.len(),
                cols: data.first().map_or(0, Vec::len),
                frames: frame_times.len(),
            });
        }
        for row in &data {
            if row.len() != frame_times.len() {
                return Err(Error::ShapeMismatch {
                    rows: data.len(),
                    bins: freqs.len(),
                    cols: row.len(),
                    frames: frame_times.len(),
                });
            }
        }

        Ok(Self {
            data,
            freqs,
            frame_times,
            sample_rate,
        })
    }

    /// Compute the spectrogram of a signal.
    ///
    /// Signals shorter than one transform are zero-padded up to a single
    /// frame; longer signals yield `(len - 1024) / 896 + 1` frames, with
    /// any trailing partial frame discarded.
    pub fn compute(signal: &AudioSignal) -> Self {
        let fs = signal.sample_rate() as f32;
        let window = hann_window(FFT_SIZE);
        let window_norm: f32 = window.iter().map(|w| w * w).sum();
        let fft = Fft::new(FFT_SIZE);

        // Pad short signals out to exactly one frame.
        let padded;
        let samples = if signal.len() < FFT_SIZE {
            let mut buf = signal.samples().to_vec();
            buf.resize(FFT_SIZE, 0.0);
            padded = buf;
            &padded[..]
        } else {
            signal.samples()
        };

        let num_frames = (samples.len() - FFT_SIZE) / HOP_SIZE + 1;
        let mut data = vec![vec![0.0f32; num_frames]; NUM_BINS];
        let mut windowed = vec![0.0f32; FFT_SIZE];

        for frame in 0..num_frames {
            let start = frame * HOP_SIZE;
            for (i, w) in window.iter().enumerate() {
                windowed[i] = samples[start + i] * w;
            }

            let spectrum = fft.forward(&windowed);
            for (bin, c) in spectrum.iter().enumerate() {
                let mut density = c.norm_sqr() / (fs * window_norm);
                // One-sided spectrum: interior bins carry both halves.
                if bin != 0 && bin != NUM_BINS - 1 {
                    density *= 2.0;
                }
                data[bin][frame] = density;
            }
        }

        let freqs = (0..NUM_BINS)
            .map(|bin| bin as f32 * fs / FFT_SIZE as f32)
            .collect();
        let frame_times = (0..num_frames)
            .map(|frame| (FFT_SIZE / 2 + frame * HOP_SIZE) as f32 / fs)
            .collect();

        Self {
            data,
            freqs,
            frame_times,
            sample_rate: fs,
        }
    }

    /// Number of frequency rows (always [`NUM_BINS`] for computed grids).
    pub fn num_bins(&self) -> usize {
        self.data.len()
    }

    /// Number of analysis frames.
    pub fn num_frames(&self) -> usize {
        self.frame_times.len()
    }

    /// Frequency axis in Hz, ascending from DC to Nyquist.
    pub fn freqs(&self) -> &[f32] {
        &self.freqs
    }

    /// Frame-center times in seconds.
    pub fn frame_times(&self) -> &[f32] {
        &self.frame_times
    }

    /// The full frequency-major grid.
    pub fn rows(&self) -> &[Vec<f32>] {
        &self.data
    }

    /// Power density at one grid cell, if in range.
    pub fn magnitude(&self, bin: usize, frame: usize) -> Option<f32> {
        self.data.get(bin).and_then(|row| row.get(frame)).copied()
    }

    /// Spacing between adjacent frequency bins in Hz.
    pub fn bin_width(&self) -> f32 {
        self.sample_rate / FFT_SIZE as f32
    }

    /// Sample rate the grid was computed from.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Per-bin maximum density across all frames.
    pub fn peak_magnitude_per_bin(&self) -> Vec<f32> {
        self.data
            .iter()
            .map(|row| row.iter().copied().fold(f32::MIN, f32::max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine_signal(freq: f32, sample_rate: u32, num_samples: usize) -> AudioSignal {
        let samples: Vec<f32> = (0..num_samples)
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                (2.0 * std::f32::consts::PI * freq * t).sin()
            })
            .collect();
        AudioSignal::new(samples, sample_rate).unwrap()
    }

    #[test]
    fn test_bin_count() {
        let signal = sine_signal(440.0, 44100, 4096);
        let spec = Spectrogram::compute(&signal);
        assert_eq!(spec.num_bins(), 513);
        assert_eq!(spec.freqs().len(), 513);
    }

    #[test]
    fn test_frame_count_formula() {
        // 10000 samples: (10000 - 1024) / 896 + 1 = 11 frames
        let signal = AudioSignal::new(vec![0.0; 10000], 44100).unwrap();
        let spec = Spectrogram::compute(&signal);
        assert_eq!(spec.num_frames(), 11);

        // Exactly one transform length
        let signal = AudioSignal::new(vec![0.0; 1024], 44100).unwrap();
        let spec = Spectrogram::compute(&signal);
        assert_eq!(spec.num_frames(), 1);
    }

    #[test]
    fn test_short_signal_zero_padded_to_one_frame() {
        let signal = AudioSignal::new(vec![0.5; 100], 44100).unwrap();
        let spec = Spectrogram::compute(&signal);
        assert_eq!(spec.num_frames(), 1);
        assert_eq!(spec.num_bins(), 513);
    }

    #[test]
    fn test_frequency_axis_spacing() {
        let signal = sine_signal(440.0, 44100, 4096);
        let spec = Spectrogram::compute(&signal);

        assert_eq!(spec.freqs()[0], 0.0);
        let width = spec.bin_width();
        assert!((width - 43.066406).abs() < 1e-3);
        assert!((spec.freqs()[1] - width).abs() < 1e-3);
        assert!((spec.freqs()[512] - 22050.0).abs() < 0.5, "last bin should sit at Nyquist");
    }

    #[test]
    fn test_frame_times_are_window_centers() {
        let signal = AudioSignal::new(vec![0.0; 4096], 44100).unwrap();
        let spec = Spectrogram::compute(&signal);

        let fs = 44100.0;
        assert!((spec.frame_times()[0] - 512.0 / fs).abs() < 1e-6);
        assert!((spec.frame_times()[1] - (512.0 + 896.0) / fs).abs() < 1e-6);
    }

    #[test]
    fn test_sine_energy_lands_in_matching_bin() {
        let sample_rate = 44100;
        // Centre the tone on bin 24 (1033.6 Hz) to avoid leakage ties.
        let freq = 24.0 * sample_rate as f32 / FFT_SIZE as f32;
        let signal = sine_signal(freq, sample_rate, 8192);
        let spec = Spectrogram::compute(&signal);

        let peaks = spec.peak_magnitude_per_bin();
        let mut best_bin = 0;
        let mut best = f32::MIN;
        for (bin, &p) in peaks.iter().enumerate() {
            if p > best {
                best_bin = bin;
                best = p;
            }
        }
        assert_eq!(best_bin, 24, "tone energy should peak in its own bin");
    }

    #[test]
    fn test_from_parts_validates_shape() {
        let freqs = vec![0.0, 10.0, 20.0];
        let times = vec![0.0, 1.0];

        let good = Spectrogram::from_parts(
            freqs.clone(),
            times.clone(),
            vec![vec![0.0; 2]; 3],
            100.0,
        );
        assert!(good.is_ok());

        let wrong_rows = Spectrogram::from_parts(
            freqs.clone(),
            times.clone(),
            vec![vec![0.0; 2]; 2],
            100.0,
        );
        assert!(matches!(wrong_rows, Err(Error::ShapeMismatch { .. })));

        let ragged = Spectrogram::from_parts(
            freqs,
            times,
            vec![vec![0.0; 2], vec![0.0; 3], vec![0.0; 2]],
            100.0,
        );
        assert!(matches!(ragged, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_magnitude_bounds() {
        let signal = AudioSignal::new(vec![0.0; 2048], 44100).unwrap();
        let spec = Spectrogram::compute(&signal);

        assert!(spec.magnitude(0, 0).is_some());
        assert!(spec.magnitude(513, 0).is_none());
        assert!(spec.magnitude(0, spec.num_frames()).is_none());
    }
}
