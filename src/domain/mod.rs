//! Domain layer
//!
//! Pure value types, the permission policy, and the ports the application
//! layer talks to. Nothing in here performs I/O.

pub mod access;
pub mod identity;
pub mod outcome;
pub mod policy;
pub mod ports;
pub mod status;

pub use access::{AccessMode, AccessRequest};
pub use identity::Identity;
pub use outcome::WaitOutcome;
pub use policy::GrantPolicy;
pub use ports::{GroupDirectory, MetadataSource, WaitSource, WaitSourceKind, WatchFactory};
pub use status::PathStatus;
