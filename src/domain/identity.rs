//! The identity access checks are evaluated for

use serde::Serialize;

/// Resolved once before the wait begins and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub username: String,
    pub uid: u32,
    pub primary_gid: u32,
}

impl Identity {
    pub fn new(username: impl Into<String>, uid: u32, primary_gid: u32) -> Self {
        Self {
            username: username.into(),
            uid,
            primary_gid,
        }
    }
}
