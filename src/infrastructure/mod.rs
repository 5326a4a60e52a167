//! Infrastructure layer
//!
//! Concrete implementations of the domain ports backed by the local
//! filesystem, the account database and the `notify` crate.

pub mod groups;
pub mod identity;
pub mod metadata;
pub mod notify_source;
pub mod poll;

pub use groups::SystemGroups;
pub use identity::resolve_identity;
pub use metadata::LocalMetadata;
pub use notify_source::{NotifySource, NotifyWatchFactory};
pub use poll::{PollSource, DEFAULT_POLL_INTERVAL_MS};
