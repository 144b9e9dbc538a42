//! Error types for the Wordle server
//!
//! Defines application-level errors and wire protocol errors.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors
///
/// Dictionary errors are fatal at startup. Inside a session an error only
/// ends that session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Dictionary file could not be opened or read (fatal)
    #[error("failure opening dictionary {}: {source}", path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dictionary file held no usable five-letter words (fatal)
    #[error("dictionary {} contains no five-letter words", path.display())]
    EmptyDictionary { path: PathBuf },

    /// No secret word can be drawn
    #[error("dictionary is empty")]
    NoWords,

    /// A word that is not exactly five ASCII letters
    #[error("invalid word: {0:?}")]
    InvalidWord(String),

    /// Malformed frame
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Wire frame decoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Frame is not the expected size
    #[error("expected {expected}-byte frame, got {actual} bytes")]
    FrameLength { expected: usize, actual: usize },

    /// Reply byte 0 was neither 'Y' nor 'N'
    #[error("invalid validity byte {0:#04x}")]
    ValidityByte(u8),

    /// Guesses-remaining field was not two ASCII digits
    #[error("invalid guesses-remaining field {0:?}")]
    Counter([u8; 2]),

    /// Feedback byte outside letters, '-' and '?'
    #[error("invalid feedback byte {0:#04x}")]
    FeedbackByte(u8),
}
