//! Synthetic test recording generation command.

use clap::{Args, Subcommand};
use resona_io::{WavSpec, write_wav};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate an exponentially decaying tone (synthetic reverb tail)
    Decay {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Tone frequency in Hz
        #[arg(long, default_value = "1000.0")]
        freq: f32,

        /// Decay time in seconds (time to fall 60 dB)
        #[arg(long, default_value = "0.6")]
        rt60: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate a hand-clap burst (impulse with a decaying noise tail)
    Clap {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Decay time in seconds (time to fall 60 dB)
        #[arg(long, default_value = "0.6")]
        rt60: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate white noise
    Noise {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.5")]
        amplitude: f32,
    },

    /// Generate silence
    Silence {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Decay {
            output,
            freq,
            rt60,
            duration,
            sample_rate,
            amplitude,
        } => {
            if rt60 <= 0.0 {
                anyhow::bail!("Decay time must be positive: {}", rt60);
            }

            println!("Generating decaying tone...");
            println!("  {} Hz falling 60 dB in {:.2}s over {:.2}s", freq, rt60, duration);

            let rate = decay_rate(rt60);
            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|i| {
                    let t = i as f32 / sample_rate as f32;
                    (2.0 * std::f32::consts::PI * freq * t).sin() * (-rate * t).exp() * amplitude
                })
                .collect();

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };

            write_wav(&output, &samples, spec)?;
            println!("Wrote {} samples to {}", samples.len(), output.display());
        }

        GenerateCommand::Clap {
            output,
            rt60,
            duration,
            sample_rate,
            amplitude,
        } => {
            if rt60 <= 0.0 {
                anyhow::bail!("Decay time must be positive: {}", rt60);
            }

            println!("Generating clap burst...");
            println!("  falling 60 dB in {:.2}s over {:.2}s", rt60, duration);

            let rate = decay_rate(rt60);
            let num_samples = (duration * sample_rate as f32) as usize;
            let mut samples: Vec<f32> = (0..num_samples)
                .map(|i| {
                    let t = i as f32 / sample_rate as f32;
                    (rand_f32() * 2.0 - 1.0) * (-rate * t).exp() * amplitude
                })
                .collect();

            // Sharp onset
            if !samples.is_empty() {
                samples[0] = amplitude;
            }

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };

            write_wav(&output, &samples, spec)?;
            println!("Wrote {} samples to {}", samples.len(), output.display());
        }

        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating sine tone...");
            println!("  {} Hz for {:.2}s", freq, duration);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|i| {
                    let t = i as f32 / sample_rate as f32;
                    (2.0 * std::f32::consts::PI * freq * t).sin() * amplitude
                })
                .collect();

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };

            write_wav(&output, &samples, spec)?;
            println!("Wrote {} samples to {}", samples.len(), output.display());
        }

        GenerateCommand::Noise {
            output,
            duration,
            sample_rate,
            amplitude,
        } => {
            println!("Generating white noise...");
            println!("  {:.2}s at {} Hz", duration, sample_rate);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples: Vec<f32> = (0..num_samples)
                .map(|_| (rand_f32() * 2.0 - 1.0) * amplitude)
                .collect();

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };

            write_wav(&output, &samples, spec)?;
            println!("Wrote {} samples to {}", samples.len(), output.display());
        }

        GenerateCommand::Silence {
            output,
            duration,
            sample_rate,
        } => {
            println!("Generating silence...");
            println!("  {:.2}s at {} Hz", duration, sample_rate);

            let num_samples = (duration * sample_rate as f32) as usize;
            let samples = vec![0.0; num_samples];

            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 32,
            };

            write_wav(&output, &samples, spec)?;
            println!("Wrote {} samples to {}", samples.len(), output.display());
        }
    }

    Ok(())
}

/// Amplitude decay rate giving a 60 dB drop after `rt60` seconds.
fn decay_rate(rt60: f32) -> f32 {
    3.0 * std::f32::consts::LN_10 / rt60
}

/// Simple PRNG for noise generation (xorshift32)
fn rand_f32() -> f32 {
    use std::cell::Cell;
    thread_local! {
        static STATE: Cell<u32> = const { Cell::new(0x12345678) };
    }

    STATE.with(|state| {
        let mut x = state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        state.set(x);
        (x as f32) / (u32::MAX as f32)
    })
}
