use std::sync::mpsc;
use std::time::Duration;

use typerate::runtime::{FixedTicker, Runner, SessionEvent, TestEventSource};
use typerate::{KeyEvent, SessionConfig, SessionState, TypingSession};

// Headless integration using the runtime plumbing without a TTY: the runner
// merges queued key events and timeout ticks into one serial feed, exactly
// the shape a real host event loop delivers.

fn runner_with_queue() -> (mpsc::Sender<SessionEvent>, Runner<TestEventSource, FixedTicker>) {
    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    (tx, Runner::new(es, ticker))
}

fn apply(session: &mut TypingSession, ev: SessionEvent) {
    match ev {
        SessionEvent::Key(key) => session.on_key(key),
        SessionEvent::Tick => session.tick(),
    }
}

#[test]
fn typing_the_whole_paragraph_finishes_the_session() {
    let mut session = TypingSession::with_defaults("hi").unwrap();
    let (tx, runner) = runner_with_queue();

    tx.send(SessionEvent::Key(KeyEvent::Insert('h'))).unwrap();
    tx.send(SessionEvent::Key(KeyEvent::Insert('i'))).unwrap();

    for _ in 0..100u32 {
        apply(&mut session, runner.step());
        if session.has_finished() {
            break;
        }
    }

    assert!(session.has_finished(), "session should finish by completion");
    let snap = session.snapshot();
    assert_eq!(snap.state, SessionState::Finished);
    assert_eq!(snap.metrics.errors, 0);
    assert_eq!(snap.metrics.accuracy, 100.0);
    assert!(snap.metrics.wpm > 0.0);
}

#[test]
fn timed_session_finishes_by_timeout() {
    let config = SessionConfig {
        duration_secs: 2,
        finish_on_paragraph_complete: true,
    };
    let mut session = TypingSession::new("hello world", config).unwrap();
    let (tx, runner) = runner_with_queue();

    // One keystroke to arm the countdown, then let ticks drain the budget.
    tx.send(SessionEvent::Key(KeyEvent::Insert('h'))).unwrap();

    for _ in 0..50u32 {
        apply(&mut session, runner.step());
        if session.has_finished() {
            break;
        }
    }

    assert!(session.has_finished(), "session should finish by timeout");
    assert_eq!(session.snapshot().remaining_secs, 0);
}

#[test]
fn queued_input_after_finish_leaves_session_untouched() {
    let mut session = TypingSession::with_defaults("hi").unwrap();
    let (tx, runner) = runner_with_queue();

    // Keystrokes beyond the paragraph end are already in the queue when the
    // session finishes; they must drain as no-ops.
    for c in "hixy".chars() {
        tx.send(SessionEvent::Key(KeyEvent::Insert(c))).unwrap();
    }
    tx.send(SessionEvent::Key(KeyEvent::Delete)).unwrap();

    for _ in 0..5 {
        apply(&mut session, runner.step());
    }
    let frozen = session.snapshot();

    // Drain the rest of the queue plus a few late ticks.
    for _ in 0..5 {
        apply(&mut session, runner.step());
    }

    assert!(session.has_finished());
    assert_eq!(session.snapshot(), frozen);
}

#[test]
fn reset_after_timeout_yields_a_fresh_session() {
    let config = SessionConfig {
        duration_secs: 1,
        finish_on_paragraph_complete: true,
    };
    let mut session = TypingSession::new("cat", config).unwrap();
    let (tx, runner) = runner_with_queue();

    tx.send(SessionEvent::Key(KeyEvent::Insert('c'))).unwrap();
    for _ in 0..10u32 {
        apply(&mut session, runner.step());
        if session.has_finished() {
            break;
        }
    }
    assert!(session.has_finished());

    session.reset();

    let snap = session.snapshot();
    assert_eq!(snap.state, SessionState::NotStarted);
    assert!(snap.typed.is_empty());
    assert!(snap.verdicts.is_empty());
    assert_eq!(snap.remaining_secs, 1);

    // The reset session is immediately usable again.
    session.on_key(KeyEvent::Insert('c'));
    assert_eq!(session.state(), SessionState::Active);
}
