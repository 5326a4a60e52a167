//! Metadata snapshot of the awaited path

/// Ownership and permission bits of an existing path.
///
/// Fetched fresh for every evaluation and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStatus {
    pub owner_uid: u32,
    pub owner_gid: u32,
    pub mode: u32,
}

impl PathStatus {
    pub fn new(owner_uid: u32, owner_gid: u32, mode: u32) -> Self {
        Self {
            owner_uid,
            owner_gid,
            mode,
        }
    }

    pub fn has_bit(&self, bit: u32) -> bool {
        self.mode & bit != 0
    }
}
