//! Per-session game state
//!
//! The guess/reply state machine for one connection, kept free of I/O so the
//! connection handler only moves bytes.

use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::error::AppError;
use crate::ledger::Ledger;
use crate::protocol::{GuessFrame, Reply};
use crate::scorer::{score, Feedback};
use crate::types::{Word, MAX_GUESSES};

/// Resources shared by every session
#[derive(Debug, Clone)]
pub struct GameContext {
    pub dictionary: Arc<Dictionary>,
    pub ledger: Arc<Ledger>,
}

impl GameContext {
    /// Wrap a loaded dictionary with a fresh ledger
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary: Arc::new(dictionary),
            ledger: Arc::new(Ledger::new()),
        }
    }
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    /// Secret guessed
    Won,
    /// Guess budget exhausted
    Lost,
    /// Client disconnected mid-game
    Abandoned,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != SessionState::AwaitingGuess
    }
}

/// Outcome of one received guess
#[derive(Debug, Clone)]
pub struct GuessRecord {
    /// Log rendering of the received frame: lowercased, non-printable bytes as '.'
    pub display: String,
    /// Guess was a dictionary word
    pub valid: bool,
    pub feedback: Feedback,
    /// Reply to send back
    pub reply: Reply,
}

/// One game against one secret word
#[derive(Debug)]
pub struct Game {
    secret: Word,
    guesses_remaining: u8,
    state: SessionState,
}

impl Game {
    /// Start a game with a word drawn from the dictionary.
    ///
    /// The secret is appended to the ledger right away.
    pub fn start(context: &GameContext) -> Result<Self, AppError> {
        let secret = context.dictionary.random_word().ok_or(AppError::NoWords)?;
        context.ledger.record_revealed_word(secret.to_uppercase());
        Ok(Self::with_secret(secret))
    }

    /// Start a game with a fixed secret, bypassing the ledger
    pub fn with_secret(secret: Word) -> Self {
        Self {
            secret,
            guesses_remaining: MAX_GUESSES,
            state: SessionState::AwaitingGuess,
        }
    }

    pub fn secret(&self) -> &Word {
        &self.secret
    }

    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ongoing(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Apply one guess frame.
    ///
    /// Words outside the dictionary leave the budget untouched. A guess on a
    /// finished game gets an invalid reply and changes nothing.
    pub fn guess(&mut self, frame: &GuessFrame, context: &GameContext) -> GuessRecord {
        let display = frame.display_lossy();
        let word = frame
            .word()
            .filter(|w| self.is_ongoing() && context.dictionary.contains_word(w));

        let Some(word) = word else {
            return GuessRecord {
                display,
                valid: false,
                feedback: Feedback::INVALID,
                reply: Reply::invalid(self.guesses_remaining),
            };
        };

        self.guesses_remaining -= 1;
        context.ledger.record_valid_guess();

        let feedback = score(&word, &self.secret);
        if word == self.secret {
            self.state = SessionState::Won;
            context.ledger.record_win();
        } else if self.guesses_remaining == 0 {
            self.state = SessionState::Lost;
            context.ledger.record_loss();
        }

        GuessRecord {
            display,
            valid: true,
            feedback,
            reply: Reply::scored(self.guesses_remaining, feedback),
        }
    }

    /// Client went away; counts as a loss unless the game already ended
    pub fn abandon(&mut self, context: &GameContext) {
        if self.is_ongoing() {
            self.state = SessionState::Abandoned;
            context.ledger.record_loss();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> GameContext {
        GameContext::new(Dictionary::from_words(["crane", "trace", "speed", "creep"], 0).unwrap())
    }

    fn frame(guess: &str) -> GuessFrame {
        GuessFrame::decode(guess.as_bytes()).unwrap()
    }

    fn game(secret: &str) -> Game {
        Game::with_secret(Word::parse(secret).unwrap())
    }

    #[test]
    fn test_start_records_secret() {
        let ctx = context();
        let game = Game::start(&ctx).unwrap();
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
        assert_eq!(game.state(), SessionState::AwaitingGuess);
        assert_eq!(ctx.ledger.snapshot().words, vec![game.secret().to_uppercase()]);
    }

    #[test]
    fn test_start_with_empty_dictionary() {
        let ctx = GameContext::new(Dictionary::new(Vec::new(), 0));
        assert!(matches!(Game::start(&ctx), Err(AppError::NoWords)));
    }

    #[test]
    fn test_winning_guess() {
        let ctx = context();
        let mut game = game("crane");

        let record = game.guess(&frame("CRANE"), &ctx);
        assert!(record.valid);
        assert_eq!(record.feedback.as_str(), "CRANE");
        assert_eq!(&record.reply.encode(), b"Y05CRANE");
        assert_eq!(game.state(), SessionState::Won);

        let snapshot = ctx.ledger.snapshot();
        assert_eq!(snapshot.valid_guesses, 1);
        assert_eq!(snapshot.wins, 1);
        assert_eq!(snapshot.losses, 0);
    }

    #[test]
    fn test_invalid_guess_keeps_budget() {
        let ctx = context();
        let mut game = game("crane");

        let record = game.guess(&frame("zzzzz"), &ctx);
        assert!(!record.valid);
        assert_eq!(&record.reply.encode(), b"N06?????");
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
        assert_eq!(game.state(), SessionState::AwaitingGuess);
        assert_eq!(ctx.ledger.snapshot().valid_guesses, 0);

        let record = game.guess(&frame("cr4ne"), &ctx);
        assert!(!record.valid);
        assert_eq!(game.guesses_remaining(), MAX_GUESSES);
    }

    #[test]
    fn test_record_display_is_log_rendering() {
        let ctx = context();
        let mut game = game("crane");

        let record = game.guess(&GuessFrame::decode(b"TR\x00CE").unwrap(), &ctx);
        assert_eq!(record.display, "tr.ce");
        assert!(!record.valid);

        let record = game.guess(&frame("TRACE"), &ctx);
        assert_eq!(record.display, "trace");
        assert_eq!(record.feedback.as_str(), "-RAcE");
    }

    #[test]
    fn test_budget_exhaustion_loses() {
        let ctx = context();
        let mut game = game("crane");

        for expected in (0..MAX_GUESSES).rev() {
            assert!(game.is_ongoing());
            let record = game.guess(&frame("speed"), &ctx);
            assert!(record.valid);
            assert_eq!(record.reply.guesses_remaining, expected);
        }

        assert_eq!(game.guesses_remaining(), 0);
        assert_eq!(game.state(), SessionState::Lost);
        let snapshot = ctx.ledger.snapshot();
        assert_eq!(snapshot.valid_guesses, u64::from(MAX_GUESSES));
        assert_eq!(snapshot.losses, 1);
        assert_eq!(snapshot.wins, 0);
    }

    #[test]
    fn test_win_on_last_guess_is_not_a_loss() {
        let ctx = context();
        let mut game = game("crane");
        for _ in 0..MAX_GUESSES - 1 {
            game.guess(&frame("trace"), &ctx);
        }
        let record = game.guess(&frame("crane"), &ctx);
        assert_eq!(&record.reply.encode(), b"Y00CRANE");
        assert_eq!(game.state(), SessionState::Won);
        assert_eq!(ctx.ledger.snapshot().losses, 0);
    }

    #[test]
    fn test_abandon_counts_once() {
        let ctx = context();
        let mut game = game("crane");
        game.guess(&frame("trace"), &ctx);
        game.guess(&frame("speed"), &ctx);

        game.abandon(&ctx);
        game.abandon(&ctx);
        assert_eq!(game.state(), SessionState::Abandoned);

        let snapshot = ctx.ledger.snapshot();
        assert_eq!(snapshot.losses, 1);
        assert_eq!(snapshot.wins, 0);
        assert_eq!(snapshot.valid_guesses, 2);
    }

    #[test]
    fn test_finished_game_ignores_guesses() {
        let ctx = context();
        let mut game = game("crane");
        game.guess(&frame("crane"), &ctx);

        let record = game.guess(&frame("crane"), &ctx);
        assert!(!record.valid);
        game.abandon(&ctx);

        let snapshot = ctx.ledger.snapshot();
        assert_eq!(snapshot.valid_guesses, 1);
        assert_eq!(snapshot.wins, 1);
        assert_eq!(snapshot.losses, 0);
    }
}
