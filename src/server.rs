//! Connection dispatcher
//!
//! Accepts TCP connections and spawns one session task per connection.
//! The accept loop never waits on a session; finished tasks are only reaped
//! so panics get logged.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn};

use crate::game::GameContext;
use crate::handler::handle_connection;
use crate::ledger::LedgerSnapshot;
use crate::shutdown::ShutdownSignal;
use crate::types::SessionId;

/// Default grace period for in-flight sessions after shutdown
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

/// Dispatcher tuning
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Cap on concurrent sessions; `None` is unbounded
    pub max_sessions: Option<NonZeroUsize>,
    /// How long to wait for in-flight sessions once accepting stops
    pub drain_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_sessions: None,
            drain_timeout: DEFAULT_DRAIN_TIMEOUT,
        }
    }
}

/// The Wordle server: a bound listener plus shared game state
pub struct WordleServer {
    listener: TcpListener,
    context: GameContext,
    config: ServerConfig,
}

impl WordleServer {
    pub fn new(listener: TcpListener, context: GameContext, config: ServerConfig) -> Self {
        Self {
            listener,
            context,
            config,
        }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the accept loop until `shutdown` fires.
    ///
    /// Then closes the listener, gives in-flight sessions up to the drain
    /// timeout to finish, and returns the final ledger snapshot.
    pub async fn run(self, shutdown: ShutdownSignal) -> LedgerSnapshot {
        let Self {
            listener,
            context,
            config,
        } = self;

        let limiter = config
            .max_sessions
            .map(|n| Arc::new(Semaphore::new(n.get())));
        let mut sessions = JoinSet::new();

        loop {
            if shutdown.is_triggered() {
                break;
            }

            let permit = match &limiter {
                Some(limiter) => tokio::select! {
                    permit = Arc::clone(limiter).acquire_owned() => match permit {
                        Ok(permit) => Some(permit),
                        Err(_) => break,
                    },
                    _ = shutdown.triggered() => break,
                },
                None => None,
            };

            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, addr)) => {
                        let session_id = SessionId::new();
                        info!("rcvd incoming connection request from {} (session {})", addr, session_id);

                        let context = context.clone();
                        sessions.spawn(async move {
                            let _permit = permit;
                            match handle_connection(stream, session_id, context).await {
                                Ok(state) => debug!("Session {} finished: {:?}", session_id, state),
                                Err(e) => error!("Session {} error: {}", session_id, e),
                            }
                        });
                    }
                    Err(e) => {
                        if shutdown.is_triggered() {
                            break;
                        }
                        error!("Failed to accept connection: {}", e);
                    }
                },
                Some(joined) = sessions.join_next(), if !sessions.is_empty() => {
                    log_join(joined);
                }
                _ = shutdown.triggered() => break,
            }
        }

        drop(listener);
        info!("Stopped accepting connections");

        if !sessions.is_empty() {
            info!(
                "Waiting up to {:?} for {} in-flight session(s)",
                config.drain_timeout,
                sessions.len()
            );
            let drained =
                tokio::time::timeout(config.drain_timeout, drain(&mut sessions)).await;
            if drained.is_err() {
                warn!("Aborting {} unfinished session(s)", sessions.len());
                sessions.shutdown().await;
            }
        }

        context.ledger.snapshot()
    }
}

async fn drain(sessions: &mut JoinSet<()>) {
    while let Some(joined) = sessions.join_next().await {
        log_join(joined);
    }
}

fn log_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        if e.is_panic() {
            error!("Session task panicked: {}", e);
        }
    }
}
