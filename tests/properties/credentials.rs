//! Property tests for credential verification.

use proptest::prelude::*;

use registrar::domain::entities::{Identity, Role};
use registrar::domain::value_objects::{PasswordDigest, UserId};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the right pair verifies; any other password does not.
    #[test]
    fn property_verify_accepts_only_the_signup_password(
        username in "[a-z][a-z0-9_]{0,15}",
        password in ".{0,32}",
        other in ".{0,32}",
    ) {
        prop_assume!(password != other);
        let identity = Identity::new(
            UserId::new(1),
            &username,
            &password,
            "Name",
            "name@example.com",
            Role::Unassigned,
        );

        prop_assert!(identity.verify(&username, &password));
        prop_assert!(!identity.verify(&username, &other));
    }

    /// PROPERTY: the stored digest is 64 lowercase hex chars and survives a reload.
    #[test]
    fn property_digest_is_lowercase_hex(password in "[ -~]{1,32}") {
        let digest = PasswordDigest::from_secret(&password);
        prop_assert_eq!(digest.as_str().len(), 64);
        prop_assert!(digest.as_str().bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert!(PasswordDigest::from_stored(digest.as_str()).matches_secret(&password));
    }
}
