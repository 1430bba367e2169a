use thiserror::Error;

/// Errors the engine can surface to a host.
///
/// The taxonomy is deliberately narrow: once a session is constructed, every
/// operation is total. Stray input against a finished session is ignored
/// rather than reported (see `TypingSession`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A session cannot be created over an empty reference text.
    #[error("reference text must contain at least one character")]
    EmptyReferenceText,
}
