//! Shared game ledger
//!
//! Process-wide counters and the log of revealed secret words.
//! Every update is one critical section under a single lock; no lock is
//! ever held across an `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

/// Point-in-time copy of the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSnapshot {
    pub valid_guesses: u64,
    pub wins: u64,
    pub losses: u64,
    /// Secret words in selection order (uppercase)
    pub words: Vec<String>,
}

/// Shared counters, mutated by every session
#[derive(Debug, Default)]
pub struct Ledger {
    state: Mutex<LedgerSnapshot>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the state consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, LedgerSnapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record_valid_guess(&self) {
        self.lock().valid_guesses += 1;
    }

    pub fn record_win(&self) {
        self.lock().wins += 1;
    }

    pub fn record_loss(&self) {
        self.lock().losses += 1;
    }

    /// Append a secret word at selection time
    pub fn record_revealed_word(&self, word: impl Into<String>) {
        self.lock().words.push(word.into());
    }

    /// Consistent copy of all fields
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.lock().clone()
    }
}

impl LedgerSnapshot {
    /// Report as a single JSON object
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
