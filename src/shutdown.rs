//! Shutdown control
//!
//! A `watch` channel carries the "stop accepting" flag from whoever triggers
//! shutdown (the signal listener, or a test) to the accept loop. Nothing is
//! torn down here; cleanup happens in the main flow once the loop exits.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Create a linked controller/signal pair
pub fn channel() -> (ShutdownController, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownController { tx }, ShutdownSignal { rx })
}

/// Triggering side
#[derive(Debug)]
pub struct ShutdownController {
    tx: watch::Sender<bool>,
}

impl ShutdownController {
    /// Request shutdown; idempotent
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Observing side, checked by the accept loop
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been requested.
    ///
    /// Never resolves if the controller is dropped without triggering.
    pub async fn triggered(&self) {
        let mut rx = self.rx.clone();
        let closed = rx.wait_for(|&stop| stop).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

/// Wait for the process shutdown signal.
///
/// SIGUSR1 on unix; Ctrl+C everywhere. Returns the signal name.
pub async fn wait_for_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut usr1 = signal(SignalKind::user_defined1())?;
        tokio::select! {
            _ = usr1.recv() => Ok("SIGUSR1"),
            res = tokio::signal::ctrl_c() => res.map(|_| "Ctrl+C"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok("Ctrl+C")
    }
}

/// Spawn a task that triggers `controller` when the process signal arrives
pub fn spawn_signal_listener(controller: ShutdownController) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("{} rcvd; Wordle server shutting down...", name);
                controller.trigger();
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_trigger_flips_flag() {
        let (controller, signal) = channel();
        assert!(!signal.is_triggered());

        controller.trigger();
        assert!(signal.is_triggered());
        assert!(signal.clone().is_triggered());

        // Already triggered: resolves immediately
        tokio::time::timeout(Duration::from_secs(1), signal.triggered())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_triggered_wakes_waiter() {
        let (controller, signal) = channel();
        let waiter = tokio::spawn(async move { signal.triggered().await });

        tokio::task::yield_now().await;
        controller.trigger();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_dropped_controller_never_triggers() {
        let (controller, signal) = channel();
        drop(controller);

        let waited = tokio::time::timeout(Duration::from_millis(50), signal.triggered()).await;
        assert!(waited.is_err());
        assert!(!signal.is_triggered());
    }
}
