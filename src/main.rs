//! Wordle Server - Entry Point
//!
//! Loads the dictionary, binds the listener and runs the accept loop until
//! SIGUSR1 (or Ctrl+C) arrives, then prints the final statistics.

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wordle_server::{shutdown, Cli, Dictionary, GameContext, LedgerSnapshot, WordleServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with environment filter
    // Use RUST_LOG env var to control log level
    // e.g., RUST_LOG=debug or RUST_LOG=wordle_server=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordle_server=info")),
        )
        .init();

    // Usage errors exit here with status 2
    let cli = Cli::parse();

    let dictionary = Dictionary::load(&cli.dictionary, cli.word_count, cli.seed).map_err(|e| {
        error!("{}", e);
        e
    })?;
    info!(
        "opened {} ({} words)",
        cli.dictionary.display(),
        dictionary.len()
    );
    info!("seeded pseudo-random number generator with {}", cli.seed);

    let addr = cli.bind_addr();
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("bind() failed on {}: {}", addr, e);
        e
    })?;
    info!("Wordle server listening on port {}", listener.local_addr()?.port());

    let (controller, signal) = shutdown::channel();
    shutdown::spawn_signal_listener(controller);

    let context = GameContext::new(dictionary);
    let server = WordleServer::new(listener, context.clone(), cli.server_config());
    let snapshot = server.run(signal).await;

    report(&snapshot);
    if cli.json_report {
        println!("{}", snapshot.to_json()?);
    }

    drop(context);
    info!("Dictionary released");

    Ok(())
}

/// Log the final statistics
fn report(snapshot: &LedgerSnapshot) {
    info!("valid guesses: {}", snapshot.valid_guesses);
    info!("win/loss: {}/{}", snapshot.wins, snapshot.losses);
    for (i, word) in snapshot.words.iter().enumerate() {
        info!("word #{}: {}", i + 1, word);
    }
}
