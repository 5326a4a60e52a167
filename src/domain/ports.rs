//! Ports - the seams between the wait logic and the operating system
//!
//! Implementations:
//! - `LocalMetadata`, `SystemGroups` - real filesystem and account database
//! - `NotifyWatchFactory`, `PollSource` - the two wait sources
//! - test doubles in the application tests

use std::path::Path;

use serde::Serialize;

use super::status::PathStatus;
use crate::error::{WaitResult, WatchSetupError};

/// Reads ownership and mode bits for a path.
pub trait MetadataSource {
    /// `Ok(None)` means the path is absent or unreachable right now, which is
    /// an ordinary waiting state. `Err` is reserved for unexpected failures.
    fn status(&self, path: &Path) -> WaitResult<Option<PathStatus>>;
}

/// Looks up the full group list of a user.
pub trait GroupDirectory {
    /// Supplementary groups of `username`, always including `primary_gid`.
    fn groups(&self, username: &str, primary_gid: u32) -> WaitResult<Vec<u32>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitSourceKind {
    Notify,
    Poll,
}

/// Something that blocks until a recheck of the predicate is warranted.
pub trait WaitSource {
    fn kind(&self) -> WaitSourceKind;

    /// Block until the next recheck. Errors are fatal to the wait.
    fn wait_for_change(&mut self) -> WaitResult<()>;
}

/// Installs change-notification watches on a directory.
pub trait WatchFactory {
    fn open(&self, dir: &Path) -> Result<Box<dyn WaitSource>, WatchSetupError>;
}
