//! Command-line interface for wordle_server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::server::ServerConfig;

/// Wordle Server - concurrent five-letter guessing game over TCP
#[derive(Parser, Debug)]
#[command(name = "wordle_server")]
#[command(about = "Concurrent Wordle game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TCP port to listen on
    pub port: u16,

    /// Seed for the secret-word random source
    pub seed: u64,

    /// Whitespace-separated word list
    pub dictionary: PathBuf,

    /// Maximum number of words to load from the dictionary
    pub word_count: usize,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Limit on concurrent sessions (unbounded if not given)
    #[arg(long)]
    pub max_sessions: Option<NonZeroUsize>,

    /// Seconds to wait for in-flight games after shutdown
    #[arg(long, default_value_t = 30)]
    pub drain_timeout_secs: u64,

    /// Also print the final statistics as JSON on stdout
    #[arg(long)]
    pub json_report: bool,
}

impl Cli {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            max_sessions: self.max_sessions,
            drain_timeout: Duration::from_secs(self.drain_timeout_secs),
        }
    }
}
