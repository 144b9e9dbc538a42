//! Word dictionary
//!
//! Loaded once at startup and read-only afterwards. Membership checks need
//! no synchronization; only the seeded random source used to pick secret
//! words sits behind a lock.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::types::Word;

/// Ordered list of five-letter words plus a lookup set
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<Word>,
    rng: Mutex<StdRng>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words.
    ///
    /// `seed` drives every later `random_word` call.
    pub fn new(words: Vec<Word>, seed: u64) -> Self {
        let index = words.iter().copied().collect();
        Self {
            words,
            index,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Build a dictionary from strings, rejecting anything that is not five letters
    pub fn from_words<I, S>(words: I, seed: u64) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let w = w.as_ref();
                Word::parse(w).ok_or_else(|| AppError::InvalidWord(w.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words, seed))
    }

    /// Load up to `limit` words from a whitespace-separated word file.
    ///
    /// Tokens that are not exactly five ASCII letters are skipped.
    pub fn load(path: &Path, limit: usize, seed: u64) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::DictionaryRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut words = Vec::with_capacity(limit.min(16_384));
        let mut skipped = 0usize;
        for token in contents.split_whitespace() {
            if words.len() == limit {
                break;
            }
            match Word::parse(token) {
                Some(word) => words.push(word),
                None => {
                    debug!("Skipping dictionary entry {:?}", token);
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            warn!("Skipped {} dictionary entries that are not five letters", skipped);
        }

        if words.is_empty() {
            return Err(AppError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }
        if words.len() < limit {
            debug!("Requested {} words, dictionary holds {}", limit, words.len());
        }

        Ok(Self::new(words, seed))
    }

    /// Case-insensitive exact membership test
    pub fn contains(&self, word: &str) -> bool {
        Word::parse(word).is_some_and(|w| self.contains_word(&w))
    }

    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly from the whole list
    ///
    /// Returns `None` only for an empty dictionary.
    pub fn random_word(&self) -> Option<Word> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        self.words.choose(&mut *rng).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
