//! Validated mono signal and its per-sample time axis.

use crate::{Error, Result};

/// A mono audio signal: samples plus sample rate.
///
/// Immutable once constructed. Construction enforces the ingestion contract
/// (at least one sample, positive sample rate), so the derived duration is
/// always well defined.
#[derive(Debug, Clone)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Create a signal from mono samples.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySignal`] if `samples` is empty,
    /// [`Error::InvalidSampleRate`] if `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptySignal);
        }
        if sample_rate == 0 {
            return Err(Error::InvalidSampleRate);
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Raw sample values.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction rejects empty sample sequences.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds: `sample_count / sample_rate`.
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Per-sample time axis: evenly spaced over `[0, duration]` with one
    /// entry per sample, both endpoints included.
    ///
    /// A one-sample signal gets the axis `[0.0]`.
    pub fn time_axis(&self) -> Vec<f32> {
        linspace(0.0, self.duration(), self.samples.len())
    }
}

/// `count` evenly spaced values from `start` to `end`, endpoints included.
///
/// For `count == 1` the axis is `[start]`. The final element is pinned to
/// `end` exactly rather than left to accumulated rounding.
pub(crate) fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }

    let step = (end - start) / (count - 1) as f32;
    let mut axis: Vec<f32> = (0..count).map(|i| start + step * i as f32).collect();
    axis[count - 1] = end;
    axis
}
