use strum_macros::Display;
use tracing::debug;

use crate::buffer::{CorrectnessTrack, TypedBuffer, Verdict};
use crate::config::SessionConfig;
use crate::error::EngineError;
use crate::metrics::Metrics;
use crate::reference::ReferenceText;
use crate::time_series::{TimeSeriesPoint, WpmSeries};
use crate::timer::Timer;

/// Lifecycle of a typing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionState {
    /// Built, timer armed but not counting. First insert moves to Active.
    NotStarted,
    /// Counting down and accepting input.
    Active,
    /// Terminal until `reset()`. All input and ticks are ignored.
    Finished,
}

/// A key event as seen by the engine. Non-printable keys other than delete
/// never reach it; the host (or `runtime::CrosstermEventSource`) drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Insert(char),
    Delete,
}

/// Read-only view of the session for rendering and results screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: SessionState,
    pub typed: Vec<char>,
    pub verdicts: Vec<Verdict>,
    pub metrics: Metrics,
    pub remaining_secs: u32,
    pub wpm_series: Vec<TimeSeriesPoint>,
}

/// The typing-assessment engine: consumes key events and one-second ticks
/// against a fixed reference text and derives live wpm/accuracy/error
/// metrics.
///
/// Single-writer by construction: all mutation goes through `on_key`, `tick`
/// and `reset`, delivered serially by the host's event loop.
#[derive(Debug, Clone)]
pub struct TypingSession {
    reference: ReferenceText,
    config: SessionConfig,
    buffer: TypedBuffer,
    track: CorrectnessTrack,
    timer: Timer,
    state: SessionState,
    wpm_series: WpmSeries,
    final_metrics: Option<Metrics>,
}

impl TypingSession {
    pub fn new(text: &str, config: SessionConfig) -> Result<Self, EngineError> {
        let reference = ReferenceText::new(text)?;
        Ok(Self {
            reference,
            config,
            buffer: TypedBuffer::new(),
            track: CorrectnessTrack::new(),
            timer: Timer::new(config.duration_secs),
            state: SessionState::NotStarted,
            wpm_series: WpmSeries::new(),
            final_metrics: None,
        })
    }

    /// 30-second session that stops at the end of the paragraph.
    pub fn with_defaults(text: &str) -> Result<Self, EngineError> {
        Self::new(text, SessionConfig::default())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_started(&self) -> bool {
        self.state != SessionState::NotStarted
    }

    pub fn has_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn reference(&self) -> &ReferenceText {
        &self.reference
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Feeds one key event into the session. Ignored once Finished.
    ///
    /// Any accepted keystroke starts a NotStarted session, delete included:
    /// the countdown is armed by the act of typing, not by what the key does
    /// to the buffer.
    pub fn on_key(&mut self, event: KeyEvent) {
        if self.state == SessionState::Finished {
            return;
        }

        if self.state == SessionState::NotStarted {
            self.state = SessionState::Active;
            debug!(duration_secs = self.config.duration_secs, "session started");
        }

        match event {
            KeyEvent::Insert(c) => self.insert(c),
            KeyEvent::Delete => self.delete_last(),
        }
    }

    /// Consumes one second of wall-clock time. Only meaningful while Active;
    /// a tick arriving in any other state is discarded, so a late tick can
    /// never revive a finished session.
    pub fn tick(&mut self) {
        if self.state != SessionState::Active {
            return;
        }

        self.timer.tick();
        let live = self.live_metrics();
        self.wpm_series
            .push(self.timer.elapsed_secs() as f64, live.wpm);

        if self.timer.is_expired() {
            self.finish("timeout");
        }
    }

    /// Returns the session to NotStarted with a clean buffer and the full
    /// timer budget, keeping the same reference text.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.track.clear();
        self.timer.reset();
        self.wpm_series.clear();
        self.final_metrics = None;
        self.state = SessionState::NotStarted;
        debug!("session reset");
    }

    /// Side-effect-free view of the whole session. Metrics are recomputed
    /// from the stores on every call while live; once Finished the frozen
    /// terminal result is returned instead.
    pub fn snapshot(&self) -> Snapshot {
        let metrics = self.final_metrics.unwrap_or_else(|| self.live_metrics());
        Snapshot {
            state: self.state,
            typed: self.buffer.as_chars().to_vec(),
            verdicts: self.track.as_verdicts().to_vec(),
            metrics,
            remaining_secs: self.timer.remaining_secs(),
            wpm_series: self.wpm_series.points().to_vec(),
        }
    }

    fn insert(&mut self, c: char) {
        let idx = self.buffer.len();
        // Positions beyond the paragraph get no verdict; they still land in
        // the buffer when the finish-on-complete policy is off.
        if let Some(expected) = self.reference.char_at(idx) {
            let verdict = if c == expected {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            self.track.record(verdict);
        }
        self.buffer.append(c);

        if self.config.finish_on_paragraph_complete && self.buffer.len() == self.reference.len() {
            self.finish("paragraph complete");
        }
    }

    fn delete_last(&mut self) {
        if self.buffer.remove_last().is_some() && self.track.len() > self.buffer.len() {
            self.track.remove_last();
        }
    }

    fn live_metrics(&self) -> Metrics {
        Metrics::compute(
            &self.buffer,
            &self.track,
            self.timer.remaining_secs(),
            self.config.duration_secs,
        )
    }

    fn finish(&mut self, reason: &str) {
        let result = self.live_metrics();
        debug!(
            reason,
            wpm = result.wpm,
            accuracy = result.accuracy,
            errors = result.errors,
            "session finished"
        );
        self.final_metrics = Some(result);
        self.state = SessionState::Finished;
    }
}
