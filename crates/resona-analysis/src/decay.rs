//! Reverberation time from a band's dB trajectory.
//!
//! The estimate follows the T20 extrapolation: locate the level peak,
//! find where the tail first drops 5 dB and 25 dB below it, and triple
//! the time between those two crossings.

use crate::scan::{argmax, first_matching, positions_equal};

/// Decay measurement for one band trajectory.
#[derive(Debug, Clone)]
pub struct DecayEstimate {
    /// Extrapolated 60 dB decay time in seconds.
    pub rt60: f32,
    /// Sample index of the level peak.
    pub peak_index: usize,
    /// Every sample index holding the -5 dB crossing value.
    pub drop5: Vec<usize>,
    /// Every sample index holding the -25 dB crossing value.
    pub drop25: Vec<usize>,
}

/// Estimate the decay of a dB trajectory against its time axis.
///
/// The crossing values are taken from the post-peak tail (first sample
/// strictly below the threshold, falling back to the tail's final sample
/// when the trajectory never drops that far), then located by exact value
/// in the full trajectory. The first occurrence anchors the timing, so a
/// pre-peak sample with the identical level wins over the tail sample
/// that produced it.
///
/// Panics if the slices are empty or differ in length.
pub fn estimate_decay(trajectory: &[f32], times: &[f32]) -> DecayEstimate {
    assert!(!trajectory.is_empty(), "decay estimation requires samples");
    assert_eq!(
        trajectory.len(),
        times.len(),
        "trajectory and time axis must align"
    );

    let (peak_index, max_db) = argmax(trajectory);
    let tail = &trajectory[peak_index..];

    let (value_5, _) = first_matching(tail, |v| v < max_db - 5.0);
    let drop5 = positions_equal(trajectory, value_5);

    let (value_25, _) = first_matching(tail, |v| v < max_db - 25.0);
    let drop25 = positions_equal(trajectory, value_25);

    let idx5 = drop5.first().copied().unwrap_or(peak_index);
    let idx25 = drop25.first().copied().unwrap_or(peak_index);

    let rt20 = times[idx25] - times[idx5];
    DecayEstimate {
        rt60: 3.0 * rt20,
        peak_index,
        drop5,
        drop25,
    }
}
