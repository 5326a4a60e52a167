use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use wait_for::{AccessRequest, GrantPolicy, Strategy, WaitConfig};

/// wait-for - waits for a file to exist and optionally have one or more modes
#[derive(Parser, Debug)]
#[command(name = "wait-for")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "If multiple modes are specified, wait-for waits for all of them to become available."
)]
pub struct Cli {
    /// Wait for the file to become readable
    #[arg(short, long)]
    pub read: bool,

    /// Wait for the file to become writable
    #[arg(short, long)]
    pub write: bool,

    /// Wait for the file to become executable
    #[arg(short = 'x', long)]
    pub execute: bool,

    /// The username to run access checks for (NOT the user ID)
    #[arg(short = 'U', long)]
    pub username: Option<String>,

    /// Poll instead of watching the parent directory
    #[arg(long)]
    pub poll: bool,

    /// Polling interval in milliseconds
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Resolve permissions like POSIX (first matching class decides)
    #[arg(long)]
    pub posix: bool,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The file to wait for
    pub file: PathBuf,
}

/// Invocation problems detected after clap has parsed the arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("username cannot be zero-length")]
    EmptyUsername,
}

impl Cli {
    pub fn validate(&self) -> Result<(), UsageError> {
        match self.username.as_deref() {
            Some("") => Err(UsageError::EmptyUsername),
            _ => Ok(()),
        }
    }

    pub fn request(&self) -> AccessRequest {
        AccessRequest::new(self.read, self.write, self.execute)
    }

    /// Layer explicitly given flags over `base`.
    pub fn apply(&self, mut base: WaitConfig) -> WaitConfig {
        if self.poll {
            base = base.with_strategy(Strategy::Poll);
        }
        if let Some(ms) = self.interval {
            base = base.with_poll_interval(Duration::from_millis(ms));
        }
        if self.posix {
            base = base.with_policy(GrantPolicy::Posix);
        }
        base
    }
}
