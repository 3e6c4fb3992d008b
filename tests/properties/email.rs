//! Property tests for email validation.

use proptest::prelude::*;

use registrar::domain::value_objects::is_valid_email;

proptest! {
    /// PROPERTY: local@domain.tld shapes are accepted.
    #[test]
    fn property_well_formed_addresses_are_valid(
        local in "[A-Za-z0-9._%+-]{1,20}",
        domain in "[A-Za-z0-9-]{1,20}(\\.[A-Za-z0-9-]{1,10}){0,2}",
        tld in "[A-Za-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email), "{email}");
    }

    /// PROPERTY: without an '@' nothing is an address.
    #[test]
    fn property_no_at_sign_is_invalid(text in "[^@]{0,40}") {
        prop_assert!(!is_valid_email(&text));
    }
}

#[test]
fn known_examples() {
    assert!(is_valid_email("a.b+c@example.co"));
    assert!(!is_valid_email("not-an-email"));
}
