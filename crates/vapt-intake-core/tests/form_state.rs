// crates/vapt-intake-core/tests/form_state.rs
// ============================================================================
// Module: Form State Tests
// Description: Tests for normalizing mutations and the error side table.
// Purpose: Pin input filtering, flag coupling, and error-clearing behavior.
// Dependencies: vapt-intake-core, proptest
// ============================================================================

//! ## Overview
//! Exercises [`FormState`] mutations: digits-only and alphabetic filters,
//! length caps, the test-credentials/account-type coupling, restriction
//! ordering, and the rule that editing a field clears its error marker.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use proptest::prelude::*;
use vapt_intake_core::AccountType;
use vapt_intake_core::Field;
use vapt_intake_core::FieldErrors;
use vapt_intake_core::FlagField;
use vapt_intake_core::FormState;
use vapt_intake_core::Restriction;
use vapt_intake_core::TextField;

// ============================================================================
// SECTION: Input Normalization
// ============================================================================

#[test]
fn device_count_strips_non_digits_and_caps_at_four() {
    let mut form = FormState::new();
    form.set_text(TextField::DeviceCount, "12a34567");
    assert_eq!(form.draft().device_count, "1234");

    form.set_text(TextField::DeviceCount, "9x9");
    assert_eq!(form.draft().device_count, "99");
}

#[test]
fn mobile_number_strips_non_digits_and_caps_at_ten() {
    let mut form = FormState::new();
    form.set_text(TextField::MobileNumber, "+91 98765-43210 ext 7");
    assert_eq!(form.draft().mobile_number, "9198765432");

    form.set_text(TextField::SecondaryMobileNumber, "98765abc43210");
    assert_eq!(form.draft().secondary_mobile_number, "9876543210");
}

#[test]
fn contact_name_and_designation_keep_letters_and_spaces() {
    let mut form = FormState::new();
    form.set_text(TextField::PrimaryContactName, "Priya Sharma 3rd");
    assert_eq!(form.draft().primary_contact_name, "Priya Sharma rd");

    form.set_text(TextField::Designation, "CISO (Acting)");
    assert_eq!(form.draft().designation, "CISO Acting");
}

#[test]
fn free_text_fields_are_stored_verbatim() {
    let mut form = FormState::new();
    form.set_text(TextField::OrganizationName, "Acme Corp. #1");
    assert_eq!(form.draft().organization_name, "Acme Corp. #1");

    form.set_text(TextField::AdditionalNotes, "  keep leading spaces  ");
    assert_eq!(form.draft().additional_notes, "  keep leading spaces  ");
}

// ============================================================================
// SECTION: Flag Coupling
// ============================================================================

#[test]
fn unsetting_test_credentials_clears_account_type() {
    let mut form = FormState::new();
    form.set_flag(FlagField::TestCredentials, true);
    form.set_account_type(Some(AccountType::Admin));
    assert_eq!(form.draft().account_type, Some(AccountType::Admin));

    form.set_flag(FlagField::TestCredentials, false);
    assert!(!form.draft().test_credentials);
    assert_eq!(form.draft().account_type, None);
}

#[test]
fn retesting_answer_is_tristate() {
    let mut form = FormState::new();
    assert_eq!(form.draft().retesting_required, None);

    form.set_flag(FlagField::RetestingRequired, false);
    assert_eq!(form.draft().retesting_required, Some(false));

    form.set_flag(FlagField::RetestingRequired, true);
    assert_eq!(form.draft().retesting_required, Some(true));
}

// ============================================================================
// SECTION: Restriction Ordering
// ============================================================================

#[test]
fn restrictions_preserve_insertion_order_without_duplicates() {
    let mut form = FormState::new();
    form.toggle_restriction(Restriction::AvoidDosTests, true);
    form.toggle_restriction(Restriction::AvoidHeavyScanning, true);
    form.toggle_restriction(Restriction::AvoidDosTests, true);
    assert_eq!(
        form.draft().restrictions,
        vec![Restriction::AvoidDosTests, Restriction::AvoidHeavyScanning]
    );

    form.toggle_restriction(Restriction::AvoidDosTests, false);
    assert_eq!(form.draft().restrictions, vec![Restriction::AvoidHeavyScanning]);
}

// ============================================================================
// SECTION: Error Clearing
// ============================================================================

#[test]
fn editing_a_field_clears_its_error_marker() {
    let mut form = FormState::new();
    let mut errors = FieldErrors::new();
    errors.flag(Field::Email);
    errors.flag(Field::MobileNumber);
    form.replace_errors(errors);
    assert!(form.errors().is_flagged(Field::Email));

    form.set_text(TextField::Email, "security@example.com");
    assert!(!form.errors().is_flagged(Field::Email));
    assert!(form.errors().is_flagged(Field::MobileNumber));
}

#[test]
fn unsetting_test_credentials_clears_account_type_marker() {
    let mut form = FormState::new();
    let mut errors = FieldErrors::new();
    errors.flag(Field::AccountType);
    form.replace_errors(errors);

    form.set_flag(FlagField::TestCredentials, false);
    assert!(!form.errors().is_flagged(Field::AccountType));
}

// ============================================================================
// SECTION: Property Tests
// ============================================================================

proptest! {
    #[test]
    fn device_count_always_holds_at_most_four_digits(input in ".*") {
        let mut form = FormState::new();
        form.set_text(TextField::DeviceCount, &input);
        let stored = &form.draft().device_count;
        prop_assert!(stored.len() <= 4);
        prop_assert!(stored.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn mobile_always_holds_at_most_ten_digits(input in ".*") {
        let mut form = FormState::new();
        form.set_text(TextField::MobileNumber, &input);
        let stored = &form.draft().mobile_number;
        prop_assert!(stored.len() <= 10);
        prop_assert!(stored.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn contact_name_never_holds_non_letters(input in ".*") {
        let mut form = FormState::new();
        form.set_text(TextField::PrimaryContactName, &input);
        prop_assert!(
            form.draft()
                .primary_contact_name
                .chars()
                .all(|ch| ch.is_ascii_alphabetic() || ch == ' ')
        );
    }
}
