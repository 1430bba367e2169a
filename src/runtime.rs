use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent as CtKeyEvent, KeyModifiers};

use crate::session::KeyEvent;

/// Unified event type consumed by a session-driving loop. Keystrokes and the
/// one-second tick are two independent sources merged into one serial queue;
/// the session sees whichever order they arrive in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Key(KeyEvent),
    Tick,
}

/// Maps a terminal key to an engine key event. Printable characters insert,
/// backspace deletes, and everything else (arrows, function keys, chords with
/// control or alt held) is dropped here so the engine never sees it.
pub fn engine_key(key: CtKeyEvent) -> Option<KeyEvent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(KeyEvent::Insert(c)),
        KeyCode::Backspace => Some(KeyEvent::Delete),
        _ => None,
    }
}

/// Source of session events (keyboard input plus anything else a host merges
/// into the queue).
pub trait SessionEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<SessionEvent, RecvTimeoutError>;
}

/// Production event source reading the terminal via crossterm.
pub struct CrosstermEventSource {
    rx: Receiver<SessionEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if let Some(ev) = engine_key(key) {
                        if tx.send(SessionEvent::Key(ev)).is_err() {
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<SessionEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker. Sessions expect a one-second cadence in
/// production; tests shrink it.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The nominal production cadence: one tick per second.
    pub fn per_second() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<SessionEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<SessionEvent>) -> Self {
        Self { rx }
    }
}

impl SessionEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<SessionEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances a session one event/tick at a time
pub struct Runner<E: SessionEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: SessionEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick on
    /// timeout.
    pub fn step(&self) -> SessionEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                SessionEvent::Tick
            }
        }
    }
}
