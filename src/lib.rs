//! wait-for - block until a file exists and grants the requested access
//!
//! Scripts use wait-for as a synchronization primitive: it returns once
//! another process has produced a file (and optionally made it readable,
//! writable or executable for a given user). Waiting is driven by change
//! notifications on the parent directory, falling back to fixed-interval
//! polling when a watch cannot be installed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Evaluator, WaitEvent, WaitLoop, WaitReport};
pub use config::{with_env_overrides, Strategy, WaitConfig};
pub use domain::{
    AccessMode, AccessRequest, GrantPolicy, Identity, PathStatus, WaitOutcome, WaitSourceKind,
};
pub use error::{WaitError, WaitResult, WatchSetupError};
pub use infrastructure::{
    resolve_identity, LocalMetadata, NotifyWatchFactory, PollSource, SystemGroups,
};
