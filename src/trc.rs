//! Tracing configuration and initialization.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Checked before `RUST_LOG`
pub const LOG_ENV: &str = "WAIT_FOR_LOG";

pub struct Trc {
    env_filter: EnvFilter,
}

impl Trc {
    /// An explicit filter in the environment wins over `-v` flags.
    pub fn new(verbose: u8) -> Self {
        let env_filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

        Self { env_filter }
    }

    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // stdout is reserved for NDJSON events
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .try_init()
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
