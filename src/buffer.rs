/// Per-position correctness judgment, fixed at the moment of entry.
///
/// A verdict is never retroactively recomputed when surrounding characters
/// change; it is removed outright when its position is erased via backspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Ordered record of the characters the user has entered this session.
///
/// Grows by append, shrinks by remove-last. Length is not bounded by the
/// reference text: when the finish-on-complete policy is disabled a user may
/// keep typing past the end, and those characters are kept (they simply never
/// receive a verdict).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedBuffer {
    entries: Vec<char>,
}

impl TypedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, c: char) {
        self.entries.push(c);
    }

    /// Removes the last entered character. No-op on an empty buffer.
    pub fn remove_last(&mut self) -> Option<char> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Index-aligned verdict store for the typed buffer.
///
/// Invariant (maintained by `TypingSession`): its length equals
/// `min(buffer.len(), reference.len())` after every operation — positions
/// beyond the reference carry no verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectnessTrack {
    verdicts: Vec<Verdict>,
}

impl CorrectnessTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the verdict for the next judged position.
    pub fn record(&mut self, verdict: Verdict) {
        self.verdicts.push(verdict);
    }

    /// Drops the verdict for the last judged position, if any.
    pub fn remove_last(&mut self) -> Option<Verdict> {
        self.verdicts.pop()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn as_verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Count of Incorrect verdicts currently on record.
    pub fn error_count(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|v| **v == Verdict::Incorrect)
            .count()
    }

    pub fn clear(&mut self) {
        self.verdicts.clear();
    }
}
