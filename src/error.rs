//! Error types for wait-for
//!
//! Uses `thiserror` for library errors. Every variant of [`WaitError`] is
//! fatal to a wait; conditions that only mean "not yet" never become errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wait-for operations
pub type WaitResult<T> = Result<T, WaitError>;

/// Fatal errors that terminate a wait
#[derive(Error, Debug)]
pub enum WaitError {
    /// stat failed for a reason other than the path being absent or unreachable
    #[error("could not stat awaited file {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Supplementary group lookup failed or exceeded the system cap
    #[error("could not retrieve list of groups for user '{username}': {reason}")]
    GroupList { username: String, reason: String },

    /// No account database entry for the requested user
    #[error("no such user: {username}")]
    UnknownUser { username: String },

    /// No account database entry for the invoking uid
    #[error("could not get passwd entry for uid {uid}")]
    UnknownUid { uid: u32 },

    /// Account database lookup itself failed
    #[error("account lookup failed: {0}")]
    AccountLookup(#[source] nix::Error),

    /// The notification channel closed while the watch was held open
    #[error("change notification channel hung up while the watch was still registered")]
    WatchClosed,

    /// The notification backend reported a read failure
    #[error("change notification read failed: {0}")]
    WatchRead(String),
}

/// Reasons a directory watch could not be installed.
///
/// These never terminate a wait; the loop downgrades to polling instead.
#[derive(Error, Debug)]
pub enum WatchSetupError {
    /// The awaited path has no parent directory to watch
    #[error("could not get dirname of {path}")]
    NoParent { path: PathBuf },

    /// The parent directory does not exist yet
    #[error("parent directory {dir} does not exist")]
    ParentMissing { dir: PathBuf },

    /// The notification backend refused the watch
    #[error("could not initialize watch handle on {dir}: {message}")]
    Backend { dir: PathBuf, message: String },
}

impl WatchSetupError {
    /// A missing parent is an ordinary waiting state and is not worth a warning.
    pub fn is_silent(&self) -> bool {
        matches!(self, WatchSetupError::ParentMissing { .. })
    }
}
