//! Property tests for permission resolution.

use proptest::prelude::*;

use wait_for::domain::policy::Membership;
use wait_for::{AccessMode, AccessRequest, GrantPolicy, PathStatus};

fn any_mode() -> impl Strategy<Value = AccessMode> {
    prop_oneof![
        Just(AccessMode::Read),
        Just(AccessMode::Write),
        Just(AccessMode::Execute),
    ]
}

fn any_request() -> impl Strategy<Value = AccessRequest> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(r, w, x)| AccessRequest::new(r, w, x))
}

fn any_membership() -> impl Strategy<Value = Membership> {
    (any::<bool>(), any::<bool>()).prop_map(|(is_owner, is_in_group)| Membership {
        is_owner,
        is_in_group,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the other bit alone is enough, whoever is asking.
    #[test]
    fn property_other_bit_always_grants(
        bits in 0u32..0o1000,
        mode in any_mode(),
        membership in any_membership(),
    ) {
        let status = PathStatus::new(0, 0, bits | mode.other_bit());
        prop_assert!(GrantPolicy::AnyClass.grants(&status, membership, mode));
    }

    /// PROPERTY: with no applicable class granting the bit, nothing is granted.
    #[test]
    fn property_no_applicable_bit_denies(
        bits in 0u32..0o1000,
        mode in any_mode(),
    ) {
        let status = PathStatus::new(0, 0, bits & !mode.other_bit());
        let stranger = Membership { is_owner: false, is_in_group: false };
        prop_assert!(!GrantPolicy::AnyClass.grants(&status, stranger, mode));
    }

    /// PROPERTY: whatever POSIX resolution grants, the relaxed policy grants too.
    #[test]
    fn property_any_policy_is_at_least_as_generous_as_posix(
        bits in 0u32..0o1000,
        request in any_request(),
        membership in any_membership(),
    ) {
        let status = PathStatus::new(0, 0, bits);
        if GrantPolicy::Posix.grants_all(&status, membership, &request) {
            prop_assert!(GrantPolicy::AnyClass.grants_all(&status, membership, &request));
        }
    }

    /// PROPERTY: adding a mode to the request can only make it harder to satisfy.
    #[test]
    fn property_larger_requests_are_stricter(
        bits in 0u32..0o1000,
        request in any_request(),
        extra in any_mode(),
        membership in any_membership(),
    ) {
        let status = PathStatus::new(0, 0, bits);
        let mut larger = request;
        match extra {
            AccessMode::Read => larger.read = true,
            AccessMode::Write => larger.write = true,
            AccessMode::Execute => larger.execute = true,
        }
        if GrantPolicy::AnyClass.grants_all(&status, membership, &larger) {
            prop_assert!(GrantPolicy::AnyClass.grants_all(&status, membership, &request));
        }
    }
}
