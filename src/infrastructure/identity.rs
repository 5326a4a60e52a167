//! Identity resolution from the account database

use nix::unistd::{getuid, User};

use crate::domain::Identity;
use crate::error::{WaitError, WaitResult};

/// Resolve `username`, or the invoking user when `None`.
///
/// Callers reject an empty username before getting here; it is a usage
/// error, not a lookup failure.
pub fn resolve_identity(username: Option<&str>) -> WaitResult<Identity> {
    let user = match username {
        Some(name) => User::from_name(name)
            .map_err(WaitError::AccountLookup)?
            .ok_or_else(|| WaitError::UnknownUser {
                username: name.to_string(),
            })?,
        None => {
            let uid = getuid();
            User::from_uid(uid)
                .map_err(WaitError::AccountLookup)?
                .ok_or(WaitError::UnknownUid { uid: uid.as_raw() })?
        }
    };

    Ok(Identity::new(user.name, user.uid.as_raw(), user.gid.as_raw()))
}
