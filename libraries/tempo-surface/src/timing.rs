//! Elapsed/total text and progress derivation
//!
//! Pure functions: no state, no synchronization. Raw controller values
//! are defensively normalized before any text or ratio is produced.

use serde::{Deserialize, Serialize};

/// Upper bound of the progress ratio pushed to surfaces
pub const PROGRESS_MAX: u32 = 1000;

/// Derived timing for one render cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingInfo {
    /// Readable elapsed time, absent when no timing is known
    pub elapsed_text: Option<String>,

    /// Readable total time, absent when the duration is unknown
    pub total_text: Option<String>,

    /// Progress in `[0, PROGRESS_MAX]`, 0 when the duration is unknown
    pub progress: u32,
}

/// Derive timing from raw millisecond position and duration
///
/// Normalization, in order: a negative position clamps to 0; a
/// non-positive duration is treated as unknown; a position past a known
/// duration clamps to it. When neither duration nor position is known
/// both texts are `None` - surfaces render a no-timing state, not
/// `"0:00"`. The final clamp on `progress` guards against rounding
/// overshoot at the exact end of a track.
pub fn compute_timing(position_ms: i64, duration_ms: i64) -> TimingInfo {
    let duration = duration_ms.max(0);
    let mut position = position_ms.max(0);
    if duration > 0 && position > duration {
        position = duration;
    }

    let elapsed_text = (duration > 0 || position > 0).then(|| readable_duration(position));
    let total_text = (duration > 0).then(|| readable_duration(duration));

    let progress = if duration > 0 {
        // Widened so a position near i64::MAX cannot overflow the scale
        let scaled = i128::from(position) * i128::from(PROGRESS_MAX) / i128::from(duration);
        scaled.clamp(0, i128::from(PROGRESS_MAX)) as u32
    } else {
        0
    };

    TimingInfo {
        elapsed_text,
        total_text,
        progress,
    }
}

/// Readable duration text: `m:ss`, or `h:mm:ss` from one hour up
pub fn readable_duration(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_duration_yields_no_total_and_zero_progress() {
        let timing = compute_timing(30_000, 0);
        assert_eq!(timing.total_text, None);
        assert_eq!(timing.progress, 0);
        // Position alone still yields elapsed text
        assert_eq!(timing.elapsed_text.as_deref(), Some("0:30"));
    }

    #[test]
    fn nothing_known_yields_no_timing_state() {
        let timing = compute_timing(0, 0);
        assert_eq!(timing.elapsed_text, None);
        assert_eq!(timing.total_text, None);
        assert_eq!(timing.progress, 0);
    }

    #[test]
    fn negative_position_clamps_to_zero() {
        let timing = compute_timing(-500, 180_000);
        assert_eq!(timing.elapsed_text.as_deref(), Some("0:00"));
        assert_eq!(timing.progress, 0);
    }

    #[test]
    fn negative_duration_is_unknown() {
        let timing = compute_timing(5_000, -1);
        assert_eq!(timing.total_text, None);
        assert_eq!(timing.progress, 0);
    }

    #[test]
    fn position_past_duration_clamps() {
        let clamped = compute_timing(200_000, 180_000);
        let at_end = compute_timing(180_000, 180_000);
        assert_eq!(clamped, at_end);
        assert_eq!(clamped.progress, PROGRESS_MAX);
    }

    #[test]
    fn midpoint_progress() {
        let timing = compute_timing(90_000, 180_000);
        assert_eq!(timing.progress, PROGRESS_MAX / 2);
        assert_eq!(timing.elapsed_text.as_deref(), Some("1:30"));
        assert_eq!(timing.total_text.as_deref(), Some("3:00"));
    }

    #[test]
    fn progress_never_exceeds_max() {
        // Large values cannot overflow past the clamp
        let timing = compute_timing(i64::MAX, i64::MAX - 1);
        assert_eq!(timing.progress, PROGRESS_MAX);
    }

    #[test]
    fn readable_duration_formats() {
        assert_eq!(readable_duration(0), "0:00");
        assert_eq!(readable_duration(5_000), "0:05");
        assert_eq!(readable_duration(65_000), "1:05");
        assert_eq!(readable_duration(3_599_000), "59:59");
        assert_eq!(readable_duration(3_600_000), "1:00:00");
        assert_eq!(readable_duration(3_723_000), "1:02:03");
    }
}
