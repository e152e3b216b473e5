//! Duration partitioning.
//!
//! Splits the bar across sequences proportionally to their durations and
//! records each sequence's absolute start and end offsets.

use crate::agenda::Sequence;
use crate::utils::round1;

/// Writes the derived fields of every sequence and returns the total
/// duration in minutes.
///
/// Percents are rounded to one decimal, so they sum to 100 only within
/// rounding. A zero total gives every sequence a zero share. Offsets are
/// running sums of the raw durations, so `end_at[i] == begin_at[i + 1]`.
pub fn partition(sequences: &mut [Sequence]) -> f64 {
    let total: f64 = sequences.iter().map(|s| s.duration_minutes).sum();

    let mut cursor = 0.0;
    for sequence in sequences.iter_mut() {
        sequence.duration_percent = if total > 0.0 {
            round1(sequence.duration_minutes * 100.0 / total)
        } else {
            0.0
        };
        sequence.begin_at_minutes = cursor;
        cursor += sequence.duration_minutes;
        sequence.end_at_minutes = cursor;
    }

    total
}

/// Bar percent elapsed before the sequence at `index` starts.
///
/// `index` may be `sequences.len()`, which yields the sum of all shares.
pub fn cumulative_percent(sequences: &[Sequence], index: usize) -> f64 {
    let end = index.min(sequences.len());
    round1(sequences[..end].iter().map(Sequence::duration_percent).sum())
}
