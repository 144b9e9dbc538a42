//! Concurrent Wordle Server Library
//!
//! Many clients play a five-letter guessing game at once over plain TCP.
//! Each connection gets its own secret word and six guesses; the server
//! answers every guess with a fixed-size reply frame and keeps process-wide
//! statistics across all games.
//!
//! # Features
//! - Fixed-size binary protocol (5-byte guess, 8-byte reply)
//! - Duplicate-safe scoring (exact matches claimed before partial ones)
//! - One task per connection, optional concurrency cap
//! - Shared statistics ledger behind a single lock
//! - Signal-triggered shutdown that lets in-flight games finish
//!
//! # Architecture
//! - `WordleServer` accepts connections and spawns a session task per connection
//! - Each session runs `handle_connection`, driving a `Game` state machine
//! - `Dictionary` is read-only after load and shared without locks
//! - `Ledger` holds the counters; every update is one short critical section
//!
//! # Example
//! ```ignore
//! use tokio::net::TcpListener;
//! use wordle_server::{shutdown, Dictionary, GameContext, ServerConfig, WordleServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dictionary = Dictionary::from_words(["crane", "trace"], 42).unwrap();
//!     let listener = TcpListener::bind("127.0.0.1:8192").await.unwrap();
//!
//!     let (controller, signal) = shutdown::channel();
//!     shutdown::spawn_signal_listener(controller);
//!
//!     let server = WordleServer::new(listener, GameContext::new(dictionary), ServerConfig::default());
//!     let stats = server.run(signal).await;
//!     println!("{} wins, {} losses", stats.wins, stats.losses);
//! }
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod handler;
pub mod ledger;
pub mod protocol;
pub mod scorer;
pub mod server;
pub mod shutdown;
pub mod types;

// Re-export main types for convenience
pub use cli::Cli;
pub use dictionary::Dictionary;
pub use error::{AppError, ProtocolError};
pub use game::{Game, GameContext, GuessRecord, SessionState};
pub use handler::handle_connection;
pub use ledger::{Ledger, LedgerSnapshot};
pub use protocol::{GuessFrame, Reply};
pub use scorer::{score, Feedback};
pub use server::{ServerConfig, WordleServer};
pub use shutdown::{ShutdownController, ShutdownSignal};
pub use types::{SessionId, Word, MAX_GUESSES, WORD_LENGTH};
