//! Frequency bands and their per-sample decibel trajectories.
//!
//! A band is resolved against the spectrogram's frequency axis by taking
//! the first bin strictly above the band's target, then that bin's power
//! row is converted to dB and resampled onto the signal's own time axis.

use crate::scan::first_matching;
use crate::signal::linspace;
use crate::spectrogram::Spectrogram;

/// The three analysis bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 100 Hz target.
    Low,
    /// 1 kHz target.
    Mid,
    /// 5 kHz target.
    High,
}

impl Band {
    /// All bands, in ascending frequency order.
    pub const ALL: [Band; 3] = [Band::Low, Band::Mid, Band::High];

    /// Target frequency in Hz.
    pub fn target_hz(&self) -> f32 {
        match self {
            Band::Low => 100.0,
            Band::Mid => 1000.0,
            Band::High => 5000.0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Mid => "Mid",
            Band::High => "High",
        }
    }

    /// Parse a display name. Case-sensitive; anything but the three
    /// exact names yields `None`.
    pub fn from_name(name: &str) -> Option<Band> {
        match name {
            "Low" => Some(Band::Low),
            "Mid" => Some(Band::Mid),
            "High" => Some(Band::High),
            _ => None,
        }
    }
}

/// Resolve a target frequency to an actual bin frequency: the first axis
/// entry strictly above the target. A target at or beyond the last entry
/// falls back to the last entry.
pub fn resolve_bin_frequency(freqs: &[f32], target_hz: f32) -> f32 {
    let (freq, _) = first_matching(freqs, |f| f > target_hz);
    freq
}

/// Extract a band's dB trajectory, resampled onto the per-sample time axis.
///
/// The bin row is converted with a plain `10 * log10`; silent frames come
/// out as negative infinity and stay that way through interpolation. The
/// row's own time axis is reconstructed as an even spread over the
/// signal's duration rather than taken from the frame centers.
pub fn band_trajectory(
    spectrogram: &Spectrogram,
    band: Band,
    duration: f32,
    time_axis: &[f32],
) -> Vec<f32> {
    let freqs = spectrogram.freqs();
    let resolved = resolve_bin_frequency(freqs, band.target_hz());
    let row_index = freqs
        .iter()
        .position(|&f| f == resolved)
        .unwrap_or(freqs.len() - 1);

    let row_db: Vec<f32> = spectrogram.rows()[row_index]
        .iter()
        .map(|&m| 10.0 * m.log10())
        .collect();

    let frame_axis = linspace(0.0, duration, row_db.len());
    interp_linear(time_axis, &frame_axis, &row_db)
}

/// Piecewise-linear interpolation of `(xp, fp)` sampled at `x`.
///
/// All three inputs must ascend. Points outside `[xp[0], xp[last]]` clamp
/// to the edge values. Non-finite `fp` segments are kept stable: when the
/// straight slope formula produces NaN the segment is re-evaluated from
/// its right anchor, and a flat segment falls back to its own value, so a
/// negative-infinity plateau interpolates to negative infinity.
fn interp_linear(x: &[f32], xp: &[f32], fp: &[f32]) -> Vec<f32> {
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());

    let last = xp.len() - 1;
    let mut out = Vec::with_capacity(x.len());
    let mut j = 0;

    for &xv in x {
        if xv <= xp[0] {
            out.push(fp[0]);
            continue;
        }
        if xv >= xp[last] {
            out.push(fp[last]);
            continue;
        }

        while j + 1 < last && xp[j + 1] <= xv {
            j += 1;
        }
        if xp[j] == xv {
            out.push(fp[j]);
            continue;
        }

        let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
        let mut value = slope * (xv - xp[j]) + fp[j];
        if value.is_nan() {
            value = slope * (xv - xp[j + 1]) + fp[j + 1];
            if value.is_nan() && fp[j] == fp[j + 1] {
                value = fp[j];
            }
        }
        out.push(value);
    }

    out
}
