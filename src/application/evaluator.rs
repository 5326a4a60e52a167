//! Predicate evaluation

use std::path::Path;

use crate::domain::policy::Membership;
use crate::domain::{
    AccessRequest, GrantPolicy, GroupDirectory, Identity, MetadataSource, WaitOutcome,
};
use crate::error::WaitResult;

/// Checks a path against an access request for one identity.
///
/// Reads metadata and group membership on every call and never caches, so it
/// is safe to call as often as the wait source wakes.
pub struct Evaluator<M, G> {
    metadata: M,
    groups: G,
    identity: Identity,
    request: AccessRequest,
    policy: GrantPolicy,
}

impl<M: MetadataSource, G: GroupDirectory> Evaluator<M, G> {
    pub fn new(metadata: M, groups: G, identity: Identity, request: AccessRequest) -> Self {
        Self {
            metadata,
            groups,
            identity,
            request,
            policy: GrantPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: GrantPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn request(&self) -> &AccessRequest {
        &self.request
    }

    pub fn policy(&self) -> GrantPolicy {
        self.policy
    }

    pub fn evaluate(&self, path: &Path) -> WaitOutcome {
        match self.check(path) {
            Ok(satisfied) => satisfied.into(),
            Err(err) => WaitOutcome::Fatal(err),
        }
    }

    fn check(&self, path: &Path) -> WaitResult<bool> {
        let Some(status) = self.metadata.status(path)? else {
            return Ok(false);
        };

        let is_owner = status.owner_uid == self.identity.uid;
        let is_in_group = self
            .groups
            .groups(&self.identity.username, self.identity.primary_gid)?
            .contains(&status.owner_gid);

        let membership = Membership {
            is_owner,
            is_in_group,
        };
        Ok(self.policy.grants_all(&status, membership, &self.request))
    }
}
