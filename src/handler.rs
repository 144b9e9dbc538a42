//! Connection handler
//!
//! Drives one game over one byte stream: read a 5-byte guess, apply it,
//! write the 8-byte reply, until the game ends or the client goes away.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::game::{Game, GameContext, SessionState};
use crate::protocol::{GuessFrame, GUESS_FRAME_LEN};
use crate::types::SessionId;

/// Run one session to completion
///
/// Generic over the stream so sessions can run on anything byte-oriented
/// (a `TcpStream` in the server, an in-memory duplex pipe in tests).
/// Returns the terminal state; the stream is shut down before returning.
pub async fn handle_connection<S>(
    mut stream: S,
    session_id: SessionId,
    context: GameContext,
) -> Result<SessionState, AppError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut game = Game::start(&context)?;
    debug!("Session {} secret word is {}", session_id, game.secret().to_uppercase());

    while game.is_ongoing() {
        debug!("Session {}: waiting for guess", session_id);

        // One receive per guess; anything shorter than a full frame ends the game
        let mut buf = [0u8; GUESS_FRAME_LEN];
        let received = stream.read(&mut buf).await;
        if !matches!(received, Ok(GUESS_FRAME_LEN)) {
            match received {
                Ok(0) => info!("Session {}: client gave up; closing TCP connection...", session_id),
                Ok(n) => info!(
                    "Session {}: short guess frame ({} bytes); closing TCP connection...",
                    session_id, n
                ),
                Err(e) => warn!("Session {}: receive failed: {}", session_id, e),
            }
            game.abandon(&context);
            info!(
                "Session {}: game over; word was {}!",
                session_id,
                game.secret().to_uppercase()
            );
            break;
        }

        let frame = GuessFrame::decode(&buf)?;
        let record = game.guess(&frame, &context);
        info!("Session {}: rcvd guess: {}", session_id, record.display);

        let remaining = record.reply.guesses_remaining;
        let plural = if remaining == 1 { "guess" } else { "guesses" };
        if record.valid {
            info!(
                "Session {}: sending reply: {} ({} {} left)",
                session_id, record.feedback, remaining, plural
            );
        } else {
            info!(
                "Session {}: invalid guess; sending reply: {} ({} {} left)",
                session_id, record.feedback, remaining, plural
            );
        }

        let reply = record.reply.encode();
        if let Err(e) = write_reply(&mut stream, &reply).await {
            warn!("Session {}: send failed: {}", session_id, e);
            game.abandon(&context);
            break;
        }

        match game.state() {
            SessionState::Won => info!(
                "Session {}: game over; word was {}!",
                session_id,
                game.secret().to_uppercase()
            ),
            SessionState::Lost => info!(
                "Session {}: out of guesses; word was {}!",
                session_id,
                game.secret().to_uppercase()
            ),
            _ => {}
        }
    }

    // Peer may already be gone
    let _ = stream.shutdown().await;

    Ok(game.state())
}

async fn write_reply<S>(stream: &mut S, reply: &[u8]) -> std::io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(reply).await?;
    stream.flush().await
}
