//! Property-based tests for timing derivation
//!
//! Uses proptest to verify the normalization and clamp laws across many
//! random inputs.

use proptest::prelude::*;
use tempo_surface::{compute_timing, PROGRESS_MAX};

proptest! {
    /// Property: unknown duration always yields zero progress and no total
    #[test]
    fn unknown_duration_has_no_progress(position in 0i64..=i64::MAX) {
        let timing = compute_timing(position, 0);
        prop_assert_eq!(timing.progress, 0);
        prop_assert_eq!(timing.total_text, None);
    }

    /// Property: progress always stays in range
    #[test]
    fn progress_is_bounded(position in any::<i64>(), duration in any::<i64>()) {
        let timing = compute_timing(position, duration);
        prop_assert!(timing.progress <= PROGRESS_MAX);
    }

    /// Property: a position past the duration behaves as end-of-track
    #[test]
    fn overshoot_equals_end_of_track(
        duration in 1i64..=i64::MAX - 1,
        excess in 1i64..1_000_000
    ) {
        let position = duration.saturating_add(excess);
        prop_assert_eq!(
            compute_timing(position, duration),
            compute_timing(duration, duration)
        );
    }

    /// Property: progress is monotonically non-decreasing in position
    #[test]
    fn progress_is_monotonic(
        duration in 1i64..=1_000_000_000,
        a in 0i64..=1_000_000_000,
        b in 0i64..=1_000_000_000
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = compute_timing(lo, duration).progress;
        let high = compute_timing(hi, duration).progress;
        prop_assert!(low <= high);
    }

    /// Property: known duration always yields both texts
    #[test]
    fn known_duration_yields_both_texts(
        position in any::<i64>(),
        duration in 1i64..=i64::MAX
    ) {
        let timing = compute_timing(position, duration);
        prop_assert!(timing.elapsed_text.is_some());
        prop_assert!(timing.total_text.is_some());
    }

    /// Property: negative inputs never panic and read as unknown
    #[test]
    fn negative_inputs_are_normalized(
        position in i64::MIN..0,
        duration in i64::MIN..=0
    ) {
        let timing = compute_timing(position, duration);
        prop_assert_eq!(timing.progress, 0);
        prop_assert_eq!(timing.elapsed_text, None);
        prop_assert_eq!(timing.total_text, None);
    }
}
