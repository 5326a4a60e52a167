//! Permission resolution policy
//!
//! The default policy treats the owner, group and other classes as
//! independently sufficient: a mode is granted when *any* class that applies
//! to the identity has its bit set. An owner whose owner bit is clear is still
//! granted access when the other bit is set. This differs from POSIX, where
//! only the first matching class is consulted. Strict resolution is opt-in
//! through [`GrantPolicy::Posix`].

use serde::{Deserialize, Serialize};

use super::access::{AccessMode, AccessRequest};
use super::status::PathStatus;

/// How the identity relates to the file's owning user and group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub is_owner: bool,
    pub is_in_group: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrantPolicy {
    /// Any applicable class with the bit set grants the mode
    #[default]
    AnyClass,
    /// Owner, then group, then other; the first applicable class decides
    Posix,
}

impl GrantPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "any" | "any-class" | "relaxed" => Some(GrantPolicy::AnyClass),
            "posix" | "strict" => Some(GrantPolicy::Posix),
            _ => None,
        }
    }

    pub fn grants(self, status: &PathStatus, membership: Membership, mode: AccessMode) -> bool {
        let owner = status.has_bit(mode.owner_bit());
        let group = status.has_bit(mode.group_bit());
        let other = status.has_bit(mode.other_bit());

        match self {
            GrantPolicy::AnyClass => {
                (membership.is_owner && owner) || (membership.is_in_group && group) || other
            }
            GrantPolicy::Posix => {
                if membership.is_owner {
                    owner
                } else if membership.is_in_group {
                    group
                } else {
                    other
                }
            }
        }
    }

    /// Every requested mode is granted. An empty request is always granted.
    pub fn grants_all(
        self,
        status: &PathStatus,
        membership: Membership,
        request: &AccessRequest,
    ) -> bool {
        request
            .modes()
            .all(|mode| self.grants(status, membership, mode))
    }
}
