//! Guess scoring
//!
//! Computes the per-letter feedback string for a guess against a secret word.
//!
//! Rendering:
//! - exact match: the letter in uppercase
//! - present elsewhere: the letter in lowercase
//! - absent: `-`
//!
//! An invalid guess is answered with `?????` and never reaches the scorer.

use crate::types::{Word, WORD_LENGTH};

/// Placeholder for a letter that is not in the secret
pub const ABSENT: u8 = b'-';

/// Placeholder used for every position of an invalid guess
pub const INVALID: u8 = b'?';

/// Rendered feedback for one guess (always five bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([u8; WORD_LENGTH]);

impl Feedback {
    /// Feedback sent for a guess that is not a dictionary word
    pub const INVALID: Self = Self([INVALID; WORD_LENGTH]);

    /// Wrap already-rendered feedback bytes
    pub fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Number of exact-match positions
    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|b| b.is_ascii_uppercase()).count()
    }

    /// True when every position is an exact match
    pub fn is_solved(&self) -> bool {
        self.exact_count() == WORD_LENGTH
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score `guess` against `secret`.
///
/// Exact matches claim their secret position first; each remaining guess
/// letter then claims the leftmost unclaimed secret position holding the
/// same letter. A secret letter satisfies at most one guess position.
pub fn score(guess: &Word, secret: &Word) -> Feedback {
    let guess = guess.as_bytes();
    let secret = secret.as_bytes();

    let mut rendered = [ABSENT; WORD_LENGTH];
    let mut claimed = [false; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        if guess[i] == secret[i] {
            rendered[i] = guess[i].to_ascii_uppercase();
            claimed[i] = true;
        }
    }

    for i in 0..WORD_LENGTH {
        if rendered[i] != ABSENT {
            continue;
        }
        let unclaimed = (0..WORD_LENGTH).find(|&j| !claimed[j] && secret[j] == guess[i]);
        if let Some(j) = unclaimed {
            rendered[i] = guess[i].to_ascii_lowercase();
            claimed[j] = true;
        }
    }

    Feedback(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_str(guess: &str, secret: &str) -> String {
        let guess = Word::parse(guess).unwrap();
        let secret = Word::parse(secret).unwrap();
        score(&guess, &secret).to_string()
    }

    #[test]
    fn test_exact_guess_is_all_uppercase() {
        let feedback = score(&Word::parse("crane").unwrap(), &Word::parse("CRANE").unwrap());
        assert_eq!(feedback.as_str(), "CRANE");
        assert!(feedback.is_solved());
    }

    #[test]
    fn test_mixed_feedback() {
        // T absent, R A E exact, C present at secret position 0
        assert_eq!(score_str("trace", "crane"), "-RAcE");
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(score_str("quick", "dream"), "-----");
    }

    #[test]
    fn test_duplicate_in_guess_single_in_secret() {
        // Only one E in "crane": the exact match at position 4 claims it
        assert_eq!(score_str("eerie", "crane"), "--r-E");
        assert_eq!(score_str("geese", "creep"), "-eE--");
    }

    #[test]
    fn test_exact_claims_before_present() {
        // Both L's of the secret are claimed by exact matches, so the first L gets nothing
        assert_eq!(score_str("lolly", "hello"), "-oLL-");
        assert_eq!(score_str("speed", "creep"), "-pEE-");
        assert_eq!(score_str("arose", "creep"), "-R--e");
    }

    #[test]
    fn test_leftmost_unclaimed_secret_position() {
        // Each A of the guess claims the next free A of the secret
        assert_eq!(score_str("alarm", "banal"), "ala--");
        assert_eq!(score_str("llama", "hello"), "ll---");
    }

    #[test]
    fn test_exact_count_matches_positions() {
        let words = ["crane", "trace", "speed", "creep", "geese", "llama", "hello", "banal"];
        for g in words {
            for s in words {
                let feedback = score(&Word::parse(g).unwrap(), &Word::parse(s).unwrap());
                let expected = g.bytes().zip(s.bytes()).filter(|(a, b)| a == b).count();
                assert_eq!(feedback.exact_count(), expected, "{} vs {}", g, s);
                assert_eq!(feedback.as_bytes().len(), WORD_LENGTH);
            }
        }
    }

    #[test]
    fn test_never_more_matches_than_secret_occurrences() {
        let words = ["eerie", "geese", "llama", "speed", "alarm", "banal", "hello"];
        for g in words {
            for s in words {
                let feedback = score(&Word::parse(g).unwrap(), &Word::parse(s).unwrap());
                for letter in b'a'..=b'z' {
                    let in_secret = s.bytes().filter(|&b| b == letter).count();
                    let matched = feedback
                        .as_bytes()
                        .iter()
                        .filter(|b| b.to_ascii_lowercase() == letter)
                        .count();
                    assert!(matched <= in_secret, "{} vs {}: letter {}", g, s, letter as char);
                }
            }
        }
    }

    #[test]
    fn test_score_is_pure() {
        let guess = Word::parse("speed").unwrap();
        let secret = Word::parse("creep").unwrap();
        let first = score(&guess, &secret);
        let second = score(&guess, &secret);
        assert_eq!(first, second);
        assert_eq!(guess.as_str(), "speed");
        assert_eq!(secret.as_str(), "creep");
    }

    #[test]
    fn test_invalid_feedback() {
        assert_eq!(Feedback::INVALID.as_str(), "?????");
        assert_eq!(Feedback::INVALID.exact_count(), 0);
        assert!(!Feedback::INVALID.is_solved());
    }
}
