//! Criterion benchmarks for resona-analysis components
//!
//! Run with: cargo bench -p resona-analysis

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use resona_analysis::{
    AudioSignal, Band, RoomAnalysis, Spectrogram, band_trajectory, estimate_decay, fft::hann_window,
    locate_resonance,
};
use std::f32::consts::PI;

const SAMPLE_RATE: u32 = 44100;

/// Generate a test sine wave
fn generate_sine(size: usize, frequency: f32) -> Vec<f32> {
    (0..size)
        .map(|i| (2.0 * PI * frequency * i as f32 / SAMPLE_RATE as f32).sin())
        .collect()
}

/// Generate a decaying tone resembling a room impulse recording
fn generate_decay(size: usize, frequency: f32) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (-6.0 * t).exp() * (2.0 * PI * frequency * t).sin()
        })
        .collect()
}

/// Generate white noise
fn generate_noise(size: usize) -> Vec<f32> {
    let mut state = 0x12345678u32;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state as i32 as f32) / (i32::MAX as f32)
        })
        .collect()
}

// ============================================================================
// Window and spectrogram benchmarks
// ============================================================================

fn bench_hann_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("HannWindow");

    let sizes = [256, 1024, 4096];

    for &size in &sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let window = hann_window(black_box(size));
                black_box(window)
            })
        });
    }

    group.finish();
}

fn bench_spectrogram_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectrogram_Compute");

    // Quarter second up to two seconds of audio
    let lengths = [11025, 44100, 88200];

    for &length in &lengths {
        let signal = AudioSignal::new(generate_noise(length), SAMPLE_RATE).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                let spec = Spectrogram::compute(black_box(&signal));
                black_box(spec)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Band trajectory benchmarks
// ============================================================================

fn bench_band_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("BandTrajectory");

    let lengths = [11025, 44100, 88200];

    for &length in &lengths {
        let signal = AudioSignal::new(generate_decay(length, 1000.0), SAMPLE_RATE).unwrap();
        let spec = Spectrogram::compute(&signal);
        let times = signal.time_axis();
        let duration = signal.duration();

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                let traj = band_trajectory(black_box(&spec), Band::Mid, duration, &times);
                black_box(traj)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Decay and resonance benchmarks
// ============================================================================

fn bench_estimate_decay(c: &mut Criterion) {
    let mut group = c.benchmark_group("EstimateDecay");

    let lengths = [11025, 44100, 88200];

    for &length in &lengths {
        let signal = AudioSignal::new(generate_decay(length, 1000.0), SAMPLE_RATE).unwrap();
        let spec = Spectrogram::compute(&signal);
        let times = signal.time_axis();
        let trajectory = band_trajectory(&spec, Band::Mid, signal.duration(), &times);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                let estimate = estimate_decay(black_box(&trajectory), &times);
                black_box(estimate)
            })
        });
    }

    group.finish();
}

fn bench_locate_resonance(c: &mut Criterion) {
    let mut group = c.benchmark_group("LocateResonance");

    let lengths = [11025, 44100, 88200];

    for &length in &lengths {
        let signal = AudioSignal::new(generate_sine(length, 440.0), SAMPLE_RATE).unwrap();
        let spec = Spectrogram::compute(&signal);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                let freq = locate_resonance(black_box(&spec));
                black_box(freq)
            })
        });
    }

    group.finish();
}

// ============================================================================
// Composite analysis benchmark
// ============================================================================

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("FullAnalysis");

    // One second of decaying tone: the typical clap recording workload
    let signal_length = 44100;

    group.bench_function("one_second_clap", |b| {
        let samples = generate_decay(signal_length, 1000.0);

        b.iter(|| {
            let signal = AudioSignal::new(samples.clone(), SAMPLE_RATE).unwrap();
            let analysis = RoomAnalysis::analyze(signal);
            black_box(analysis)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_hann_window,
    bench_spectrogram_compute,
    bench_band_trajectory,
    bench_estimate_decay,
    bench_locate_resonance,
    bench_full_analysis,
);

criterion_main!(benches);
