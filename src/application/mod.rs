//! Application layer
//!
//! - `Evaluator` - answers "does the path satisfy the request right now?"
//! - `WaitLoop` - re-evaluates until satisfied, driven by a `WaitSource`
//! - `WaitEvent` - progress events for NDJSON output
//!
//! ## Usage
//!
//! ```ignore
//! let evaluator = Evaluator::new(LocalMetadata::new(), SystemGroups::new(), identity, request);
//! let report = WaitLoop::new(evaluator, NotifyWatchFactory::new(), config)
//!     .run(path, |event| { ... })?;
//! ```

mod evaluator;
mod event;
mod wait_loop;


pub use evaluator::Evaluator;
pub use event::WaitEvent;
pub use wait_loop::{parent_dir, WaitLoop, WaitReport};
