use crate::buffer::{CorrectnessTrack, TypedBuffer};

/// Fixed characters-per-"word" convention. Deterministic and insensitive to
/// whitespace, unlike word-boundary splitting.
const CHARS_PER_WORD: f64 = 5.0;

/// Smallest elapsed time used for rate math, so the first second of a session
/// never divides by zero.
const MIN_ELAPSED_MINUTES: f64 = 1.0 / 60.0;

/// Live performance snapshot, always derived, never stored as independent
/// mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub wpm: f64,
    pub accuracy: f64,
    pub errors: usize,
}

impl Metrics {
    /// Recomputes all metrics from the session's stores alone.
    pub fn compute(
        buffer: &TypedBuffer,
        track: &CorrectnessTrack,
        remaining_secs: u32,
        duration_secs: u32,
    ) -> Self {
        let errors = track.error_count();
        let typed = buffer.len();
        // Characters typed past the reference carry no verdict and count as
        // misses here.
        let correct = track.len() - errors;

        let accuracy = if typed == 0 {
            100.0
        } else {
            round2((correct as f64 / typed as f64) * 100.0)
        };

        let elapsed = elapsed_minutes(duration_secs, remaining_secs);
        let wpm = round2((correct as f64 / CHARS_PER_WORD) / elapsed);

        Self {
            wpm,
            accuracy,
            errors,
        }
    }
}

/// Minutes consumed so far, floored at one second's worth.
pub fn elapsed_minutes(duration_secs: u32, remaining_secs: u32) -> f64 {
    let elapsed = duration_secs.saturating_sub(remaining_secs) as f64 / 60.0;
    elapsed.max(MIN_ELAPSED_MINUTES)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
