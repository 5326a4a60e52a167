//! stat(2) through `std::fs`

use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use nix::errno::Errno;

use crate::domain::{MetadataSource, PathStatus};
use crate::error::{WaitError, WaitResult};

/// Follows symlinks, so a dangling link counts as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMetadata;

impl LocalMetadata {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for LocalMetadata {
    fn status(&self, path: &Path) -> WaitResult<Option<PathStatus>> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(Some(PathStatus::new(
                meta.uid(),
                meta.gid(),
                meta.mode() & 0o7777,
            ))),
            Err(err) if is_transient(&err) => Ok(None),
            Err(source) => Err(WaitError::Metadata {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Missing, untraversable, not-a-directory, or text file busy: keep waiting.
pub(crate) fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.raw_os_error().map(Errno::from_raw),
        Some(Errno::ENOENT | Errno::EACCES | Errno::ENOTDIR | Errno::ETXTBSY)
    )
}
