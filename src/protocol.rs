//! Wire protocol definitions
//!
//! Fixed-size binary frames over a raw byte stream:
//!
//! Guess (client -> server), 5 bytes: the guessed letters, no terminator.
//!
//! Reply (server -> client), 8 bytes:
//! - byte 0: `Y` valid dictionary word, `N` otherwise
//! - bytes 1-2: guesses remaining, two ASCII digits
//! - bytes 3-7: feedback string (`?????` for an invalid guess)

use crate::error::ProtocolError;
use crate::scorer::{Feedback, ABSENT, INVALID};
use crate::types::{Word, WORD_LENGTH};

/// Size of a guess frame
pub const GUESS_FRAME_LEN: usize = WORD_LENGTH;

/// Size of a reply frame
pub const REPLY_FRAME_LEN: usize = 3 + WORD_LENGTH;

/// Guess frame as received, before dictionary validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessFrame([u8; GUESS_FRAME_LEN]);

impl GuessFrame {
    /// Decode a guess frame, checking its length first
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        let bytes: [u8; GUESS_FRAME_LEN] =
            buf.try_into().map_err(|_| ProtocolError::FrameLength {
                expected: GUESS_FRAME_LEN,
                actual: buf.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn encode(&self) -> [u8; GUESS_FRAME_LEN] {
        self.0
    }

    /// Frame for a word, as a client would send it
    pub fn from_word(word: &Word) -> Self {
        Self(*word.as_bytes())
    }

    /// The guessed word, if the frame holds five letters
    pub fn word(&self) -> Option<Word> {
        Word::from_bytes(&self.0)
    }

    /// Printable form for logs; non-printable bytes become '.'
    pub fn display_lossy(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() {
                    char::from(b.to_ascii_lowercase())
                } else {
                    '.'
                }
            })
            .collect()
    }
}

/// Server reply to one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    /// Guess was a dictionary word
    pub valid: bool,
    /// Guesses remaining after this attempt
    pub guesses_remaining: u8,
    pub feedback: Feedback,
}

impl Reply {
    /// Reply to a guess that is not in the dictionary
    pub fn invalid(guesses_remaining: u8) -> Self {
        Self {
            valid: false,
            guesses_remaining,
            feedback: Feedback::INVALID,
        }
    }

    /// Reply to a scored guess
    pub fn scored(guesses_remaining: u8, feedback: Feedback) -> Self {
        Self {
            valid: true,
            guesses_remaining,
            feedback,
        }
    }

    pub fn encode(&self) -> [u8; REPLY_FRAME_LEN] {
        let mut frame = [0u8; REPLY_FRAME_LEN];
        frame[0] = if self.valid { b'Y' } else { b'N' };
        let remaining = self.guesses_remaining.min(99);
        frame[1] = b'0' + remaining / 10;
        frame[2] = b'0' + remaining % 10;
        frame[3..].copy_from_slice(self.feedback.as_bytes());
        frame
    }

    /// Decode a reply frame, validating every byte
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        let frame: [u8; REPLY_FRAME_LEN] =
            buf.try_into().map_err(|_| ProtocolError::FrameLength {
                expected: REPLY_FRAME_LEN,
                actual: buf.len(),
            })?;

        let valid = match frame[0] {
            b'Y' => true,
            b'N' => false,
            other => return Err(ProtocolError::ValidityByte(other)),
        };

        let counter = [frame[1], frame[2]];
        if !counter.iter().all(u8::is_ascii_digit) {
            return Err(ProtocolError::Counter(counter));
        }
        let guesses_remaining = (counter[0] - b'0') * 10 + (counter[1] - b'0');

        let mut feedback = [0u8; WORD_LENGTH];
        feedback.copy_from_slice(&frame[3..]);
        if let Some(&bad) = feedback
            .iter()
            .find(|&&b| !(b.is_ascii_alphabetic() || b == ABSENT || b == INVALID))
        {
            return Err(ProtocolError::FeedbackByte(bad));
        }

        Ok(Self {
            valid,
            guesses_remaining,
            feedback: Feedback::from_bytes(feedback),
        })
    }
}
