use crate::error::EngineError;

/// The fixed paragraph the user is asked to reproduce.
///
/// Immutable for the session lifetime. Comparison is per `char` (code point);
/// grapheme clustering is out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceText {
    chars: Vec<char>,
}

impl ReferenceText {
    pub fn new(text: &str) -> Result<Self, EngineError> {
        if text.is_empty() {
            return Err(EngineError::EmptyReferenceText);
        }
        Ok(Self {
            chars: text.chars().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Expected character at `idx`, or `None` past the end of the paragraph.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}
