//! Requested access modes

use serde::Serialize;

/// A single access mode and the permission bits that grant it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Read,
    Write,
    Execute,
}

impl AccessMode {
    pub const ALL: [AccessMode; 3] = [AccessMode::Read, AccessMode::Write, AccessMode::Execute];

    /// Bit granting this mode to the owning user
    pub fn owner_bit(self) -> u32 {
        match self {
            AccessMode::Read => 0o400,
            AccessMode::Write => 0o200,
            AccessMode::Execute => 0o100,
        }
    }

    /// Bit granting this mode to members of the owning group
    pub fn group_bit(self) -> u32 {
        self.owner_bit() >> 3
    }

    /// Bit granting this mode to everyone else
    pub fn other_bit(self) -> u32 {
        self.owner_bit() >> 6
    }
}

/// The set of modes a wait must see granted.
///
/// An empty request waits for existence only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AccessRequest {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl AccessRequest {
    pub fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }

    /// Existence only
    pub fn exists() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !(self.read || self.write || self.execute)
    }

    pub fn contains(&self, mode: AccessMode) -> bool {
        match mode {
            AccessMode::Read => self.read,
            AccessMode::Write => self.write,
            AccessMode::Execute => self.execute,
        }
    }

    /// Requested modes in read, write, execute order
    pub fn modes(&self) -> impl Iterator<Item = AccessMode> + '_ {
        AccessMode::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_bits() {
        assert_eq!(AccessMode::Read.owner_bit(), 0o400);
        assert_eq!(AccessMode::Read.group_bit(), 0o040);
        assert_eq!(AccessMode::Read.other_bit(), 0o004);
        assert_eq!(AccessMode::Write.group_bit(), 0o020);
        assert_eq!(AccessMode::Execute.other_bit(), 0o001);
    }

    #[test]
    fn test_empty_request_has_no_modes() {
        let request = AccessRequest::exists();
        assert!(request.is_empty());
        assert_eq!(request.modes().count(), 0);
    }

    #[test]
    fn test_modes_preserve_order() {
        let request = AccessRequest::new(true, false, true);
        let modes: Vec<_> = request.modes().collect();
        assert_eq!(modes, vec![AccessMode::Read, AccessMode::Execute]);
    }
}
