//! Basic type definitions for the Wordle server
//!
//! Provides newtype wrappers for type safety:
//! - `SessionId`: UUID-based unique session identifier
//! - `Word`: five ASCII letters, stored lowercase

use uuid::Uuid;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Guess budget each session starts with
pub const MAX_GUESSES: u8 = 6;

/// Unique session identifier (newtype pattern)
///
/// Wraps a UUID v4; one per accepted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A five-letter word
///
/// Always holds lowercase ASCII letters, so equality is case-insensitive
/// with respect to whatever was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Build a word from raw bytes, folding case.
    ///
    /// Returns `None` unless there are exactly five ASCII letters.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let letters: [u8; WORD_LENGTH] = bytes.try_into().ok()?;
        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self(letters.map(|b| b.to_ascii_lowercase())))
    }

    /// Parse a word from a string (case-insensitive)
    pub fn parse(word: &str) -> Option<Self> {
        Self::from_bytes(word.as_bytes())
    }

    /// Lowercase letters
    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Uppercase rendering, used when a secret is revealed
    pub fn to_uppercase(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_unique() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_word_folds_case() {
        let word = Word::parse("CrAnE").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.to_uppercase(), "CRANE");
        assert_eq!(word, Word::parse("crane").unwrap());
    }

    #[test]
    fn test_word_rejects_bad_input() {
        assert!(Word::parse("cran").is_none());
        assert!(Word::parse("cranes").is_none());
        assert!(Word::parse("cr4ne").is_none());
        assert!(Word::from_bytes(b"cr\0ne").is_none());
    }
}
