//! Sequential scan primitives shared by the band and decay stages.
//!
//! These deliberately use plain linear scans with first-occurrence
//! semantics: band resolution, threshold crossing, and peak location all
//! depend on which candidate is reported when several qualify.

/// Scan `values` in order and return the first element satisfying
/// `predicate`, with `true` marking a real match.
///
/// When no element qualifies, returns the final element with `false` so
/// the caller still has a usable value.
///
/// Panics if `values` is empty.
pub fn first_matching(values: &[f32], predicate: impl Fn(f32) -> bool) -> (f32, bool) {
    assert!(!values.is_empty(), "scan requires a non-empty sequence");

    for &v in values {
        if predicate(v) {
            return (v, true);
        }
    }
    (values[values.len() - 1], false)
}

/// All indices where `values` holds exactly `value`.
///
/// Bitwise equality on purpose: the caller passes back a value previously
/// copied out of the same slice, so at least one index always matches.
pub fn positions_equal(values: &[f32], value: f32) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == value)
        .map(|(i, _)| i)
        .collect()
}

/// Index and value of the maximum element, first occurrence winning ties.
///
/// Panics if `values` is empty.
pub fn argmax(values: &[f32]) -> (usize, f32) {
    assert!(!values.is_empty(), "argmax requires a non-empty sequence");

    let mut best_index = 0;
    let mut best = values[0];
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best {
            best_index = i;
            best = v;
        }
    }
    (best_index, best)
}

/// Recover the row of a flat index into a row-major grid with
/// `frames_per_row` columns.
pub fn row_from_flat_index(flat_index: usize, frames_per_row: usize) -> usize {
    assert!(frames_per_row > 0, "grid rows cannot be empty");
    flat_index / frames_per_row
}
