//! WAV file reading and writing.

use crate::Result;
use hound::{SampleFormat, WavReader, WavWriter};
use resona_analysis::AudioSignal;
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
///
/// Opens the file, reads the header, and returns a [`WavInfo`] struct
/// with format details and duration. This is much faster than [`read_wav`]
/// for files where you only need metadata.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = reader.len() as u64; // total across all channels
    let num_frames = total_samples / spec.channels as u64;
    let duration_secs = num_frames as f64 / spec.sample_rate as f64;

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16 for PCM, 32 for float).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

/// Read a WAV file into an analysis-ready mono signal.
///
/// Integer PCM samples are normalized to `[-1, 1]`; float samples pass
/// through unchanged. Multi-channel files are mixed down to mono by
/// averaging channels. A file with no sample data is rejected.
///
/// # Example
/// ```ignore
/// let signal = read_wav("clap.wav")?;
/// println!("Loaded {} samples at {} Hz", signal.len(), signal.sample_rate());
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<AudioSignal> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;

    let samples: Vec<f32> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max_val = (1i32 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    // Mix down to mono if multi-channel
    let mono_samples = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    tracing::debug!(
        "read {} mono samples at {} Hz from {} channel(s)",
        mono_samples.len(),
        spec.sample_rate,
        channels
    );

    Ok(AudioSignal::new(mono_samples, spec.sample_rate)?)
}

/// Write mono samples to a WAV file.
///
/// 32-bit specs write IEEE float samples; anything else writes integer
/// PCM at the requested bit depth.
///
/// # Example
/// ```ignore
/// let samples = vec![0.0f32; 44100]; // 1 second of silence
/// let spec = WavSpec::default();
/// write_wav("output.wav", &samples, spec)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    let hound_spec = hound::WavSpec::from(spec);
    let mut writer = WavWriter::create(path, hound_spec)?;

    if spec.bits_per_sample == 32 {
        for &sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = (1i32 << (spec.bits_per_sample - 1)) as f32;
        for &sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roundtrip_f32() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let signal = read_wav(file.path()).unwrap();
        assert_eq!(signal.sample_rate(), 48000);
        assert_eq!(signal.len(), samples.len());

        for (a, b) in samples.iter().zip(signal.samples()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_roundtrip_i16() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin() * 0.9).collect();
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let signal = read_wav(file.path()).unwrap();
        assert_eq!(signal.sample_rate(), 44100);
        assert_eq!(signal.len(), samples.len());

        // 16-bit has less precision
        for (a, b) in samples.iter().zip(signal.samples()) {
            assert!((a - b).abs() < 0.001);
        }
    }

    #[test]
    fn test_pcm_normalization_range() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &[-1.0, 1.0], spec).unwrap();

        let signal = read_wav(file.path()).unwrap();
        assert_eq!(signal.samples()[0], -1.0, "full-scale negative maps to -1.0");
        assert!(
            (signal.samples()[1] - 1.0).abs() < 1e-3,
            "full-scale positive maps to just under 1.0, got {}",
            signal.samples()[1]
        );
    }

    #[test]
    fn test_stereo_mixes_down_to_mono() {
        // Interleaved L/R pairs that cancel exactly when averaged.
        let interleaved = [0.5, -0.5, 0.25, -0.25, 0.8, -0.8];
        let spec = WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 32,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &interleaved, spec).unwrap();

        let signal = read_wav(file.path()).unwrap();
        assert_eq!(signal.len(), 3, "three stereo frames become three samples");
        for &v in signal.samples() {
            assert!(v.abs() < 1e-6, "opposite channels should average to zero, got {v}");
        }
    }

    #[test]
    fn test_empty_file_rejected() {
        let spec = WavSpec::default();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &[], spec).unwrap();

        let result = read_wav(file.path());
        assert!(
            matches!(result, Err(Error::Signal(resona_analysis::Error::EmptySignal))),
            "a WAV without samples cannot become a signal"
        );
    }

    #[test]
    fn test_read_wav_info() {
        let samples = vec![0.0f32; 22050];
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.num_frames, 22050);
        assert!((info.duration_secs - 0.5).abs() < 1e-9);
        assert_eq!(info.format, WavFormat::Pcm);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = read_wav("/nonexistent/path/to/recording.wav");
        assert!(result.is_err());
    }
}
