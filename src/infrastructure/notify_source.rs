//! Change notifications on the parent directory via `notify`

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, trace};

use crate::domain::{WaitSource, WaitSourceKind, WatchFactory};
use crate::error::{WaitError, WaitResult, WatchSetupError};

/// Opens [`NotifySource`]s with the platform's recommended backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyWatchFactory;

impl NotifyWatchFactory {
    pub fn new() -> Self {
        Self
    }
}

impl WatchFactory for NotifyWatchFactory {
    fn open(&self, dir: &Path) -> Result<Box<dyn WaitSource>, WatchSetupError> {
        Ok(Box::new(NotifySource::watch(dir)?))
    }
}

/// Receiving end of a watcher's event channel.
///
/// Blocks until an event that can change the outcome arrives, then swallows
/// whatever else is already queued so a burst costs one recheck.
pub(crate) struct EventStream {
    rx: Receiver<notify::Result<Event>>,
}

impl EventStream {
    pub(crate) fn new(rx: Receiver<notify::Result<Event>>) -> Self {
        Self { rx }
    }

    pub(crate) fn next_change(&self) -> WaitResult<()> {
        loop {
            match self.rx.recv() {
                Ok(Ok(event)) if warrants_recheck(&event.kind) => {
                    trace!(kind = ?event.kind, "change notification");
                    return self.drain_pending();
                }
                Ok(Ok(_)) => continue,
                Ok(Err(err)) => return Err(WaitError::WatchRead(err.to_string())),
                Err(_) => return Err(WaitError::WatchClosed),
            }
        }
    }

    fn drain_pending(&self) -> WaitResult<()> {
        loop {
            match self.rx.try_recv() {
                Ok(Ok(_)) => continue,
                Ok(Err(err)) => return Err(WaitError::WatchRead(err.to_string())),
                // disconnection surfaces on the next blocking receive
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Ok(()),
            }
        }
    }
}

/// A registered, non-recursive watch on one directory.
///
/// The watch is unregistered when the source is dropped.
pub struct NotifySource {
    dir: PathBuf,
    watcher: RecommendedWatcher,
    events: EventStream,
}

impl NotifySource {
    pub fn watch(dir: &Path) -> Result<Self, WatchSetupError> {
        let (tx, rx) = channel::<notify::Result<Event>>();

        let mut watcher =
            RecommendedWatcher::new(tx, Config::default()).map_err(|e| WatchSetupError::Backend {
                dir: dir.to_path_buf(),
                message: e.to_string(),
            })?;

        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| setup_error(dir, e))?;

        debug!(dir = %dir.display(), "watch registered");

        Ok(Self {
            dir: dir.to_path_buf(),
            watcher,
            events: EventStream::new(rx),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl WaitSource for NotifySource {
    fn kind(&self) -> WaitSourceKind {
        WaitSourceKind::Notify
    }

    fn wait_for_change(&mut self) -> WaitResult<()> {
        self.events.next_change()
    }
}

impl Drop for NotifySource {
    fn drop(&mut self) {
        let _ = self.watcher.unwatch(&self.dir);
        debug!(dir = %self.dir.display(), "watch released");
    }
}

/// Creations, attribute or content changes, and moves in either direction.
/// Opens, closes and deletions cannot make the predicate true.
fn warrants_recheck(kind: &EventKind) -> bool {
    !matches!(kind, EventKind::Access(_) | EventKind::Remove(_))
}

fn setup_error(dir: &Path, err: notify::Error) -> WatchSetupError {
    let missing = match &err.kind {
        notify::ErrorKind::PathNotFound => true,
        notify::ErrorKind::Io(io) => io.kind() == std::io::ErrorKind::NotFound,
        _ => false,
    };

    if missing {
        WatchSetupError::ParentMissing {
            dir: dir.to_path_buf(),
        }
    } else {
        WatchSetupError::Backend {
            dir: dir.to_path_buf(),
            message: err.to_string(),
        }
    }
}
