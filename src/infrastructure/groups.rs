//! Supplementary group lookup

use std::ffi::CString;

use nix::unistd::{getgrouplist, Gid};

use crate::domain::GroupDirectory;
use crate::error::{WaitError, WaitResult};

/// Group membership from the system account database.
///
/// The list is grown up to the kernel's `NGROUPS_MAX`. A user in more groups
/// than that is reported as an error rather than silently truncated, since a
/// truncated list would hide real memberships.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGroups;

impl SystemGroups {
    pub fn new() -> Self {
        Self
    }
}

impl GroupDirectory for SystemGroups {
    fn groups(&self, username: &str, primary_gid: u32) -> WaitResult<Vec<u32>> {
        let name = CString::new(username).map_err(|_| WaitError::GroupList {
            username: username.to_string(),
            reason: "username contains a NUL byte".to_string(),
        })?;

        let groups = getgrouplist(&name, Gid::from_raw(primary_gid)).map_err(|errno| {
            WaitError::GroupList {
                username: username.to_string(),
                reason: errno.to_string(),
            }
        })?;

        Ok(groups.into_iter().map(Gid::as_raw).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_gid_is_always_listed() {
        let user = nix::unistd::User::from_uid(nix::unistd::getuid())
            .unwrap()
            .expect("current user has a passwd entry");

        let groups = SystemGroups::new()
            .groups(&user.name, user.gid.as_raw())
            .unwrap();
        assert!(groups.contains(&user.gid.as_raw()));
    }

    #[test]
    fn test_nul_in_username_is_fatal() {
        let err = SystemGroups::new().groups("bad\0name", 0).unwrap_err();
        assert!(matches!(err, WaitError::GroupList { .. }));
    }
}
