// Typing-speed assessment engine. The host supplies a reference paragraph,
// a serial feed of key events, and a one-second tick; the engine owns the
// session state machine and derives all metrics from it.
pub mod buffer;
pub mod config;
pub mod error;
pub mod metrics;
pub mod reference;
pub mod runtime;
pub mod session;
pub mod time_series;
pub mod timer;

pub use buffer::{CorrectnessTrack, TypedBuffer, Verdict};
pub use config::{ConfigStore, FileConfigStore, SessionConfig};
pub use error::EngineError;
pub use metrics::Metrics;
pub use reference::ReferenceText;
pub use session::{KeyEvent, SessionState, Snapshot, TypingSession};
pub use time_series::{TimeSeriesPoint, WpmSeries};
pub use timer::Timer;

/// Countdown budget used when the host does not configure one.
pub const DEFAULT_DURATION_SECS: u32 = 30;
