//! Runtime configuration
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WAIT_FOR_*)
//! 3. Built-in defaults (lowest priority)
//!
//! `WAIT_FOR_STRATEGY=poll` is meant for filesystems where change
//! notifications are unreliable (NFS, FUSE).

use std::time::Duration;

use serde::Serialize;

use crate::domain::GrantPolicy;
use crate::infrastructure::DEFAULT_POLL_INTERVAL_MS;

pub const STRATEGY_VAR: &str = "WAIT_FOR_STRATEGY";
pub const INTERVAL_VAR: &str = "WAIT_FOR_INTERVAL_MS";
pub const POLICY_VAR: &str = "WAIT_FOR_POLICY";

/// Which wait source to try first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Change notifications, falling back to polling
    #[default]
    Auto,
    /// Polling only
    Poll,
}

impl Strategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" | "notify" => Some(Strategy::Auto),
            "poll" => Some(Strategy::Poll),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitConfig {
    pub strategy: Strategy,
    pub poll_interval: Duration,
    pub policy: GrantPolicy,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            policy: GrantPolicy::AnyClass,
        }
    }
}

impl WaitConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_policy(mut self, policy: GrantPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Apply environment variable overrides (WAIT_FOR_* prefix)
pub fn with_env_overrides(config: WaitConfig) -> WaitConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Unparseable values are ignored and leave the field as it was.
pub fn apply_overrides(
    mut config: WaitConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> WaitConfig {
    if let Some(strategy) = lookup(STRATEGY_VAR).and_then(|v| Strategy::from_name(&v)) {
        config.strategy = strategy;
    }

    if let Some(ms) = lookup(INTERVAL_VAR).and_then(|v| v.trim().parse::<u64>().ok()) {
        if ms > 0 {
            config.poll_interval = Duration::from_millis(ms);
        }
    }

    if let Some(policy) = lookup(POLICY_VAR).and_then(|v| GrantPolicy::from_name(&v)) {
        config.policy = policy;
    }

    config
}
