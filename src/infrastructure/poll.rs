//! Fixed-interval polling

use std::thread;
use std::time::Duration;

use crate::domain::{WaitSource, WaitSourceKind};
use crate::error::WaitResult;

/// Default delay between polls
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, Copy)]
pub struct PollSource {
    interval: Duration,
}

impl PollSource {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PollSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS))
    }
}

impl WaitSource for PollSource {
    fn kind(&self) -> WaitSourceKind {
        WaitSourceKind::Poll
    }

    fn wait_for_change(&mut self) -> WaitResult<()> {
        // thread::sleep resumes after EINTR on its own
        thread::sleep(self.interval);
        Ok(())
    }
}
