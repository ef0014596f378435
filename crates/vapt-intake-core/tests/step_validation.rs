// crates/vapt-intake-core/tests/step_validation.rs
// ============================================================================
// Module: Step Validation Tests
// Description: Tests for per-step rule sets and the final submission union.
// Purpose: Pin rule ordering, error sets, and diagnostic wording per step.
// Dependencies: vapt-intake-core
// ============================================================================

//! ## Overview
//! Exercises [`validate_step`] per step and [`validate_submission`] as the
//! union of the step 1-3 rule sets. Rules fire in a fixed order; the first
//! violation short-circuits the rest and the returned error set replaces any
//! previous one.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use vapt_intake_core::AccountType;
use vapt_intake_core::AssessmentType;
use vapt_intake_core::EnvironmentType;
use vapt_intake_core::Field;
use vapt_intake_core::FlagField;
use vapt_intake_core::FormState;
use vapt_intake_core::ReportFormat;
use vapt_intake_core::SubmissionDraft;
use vapt_intake_core::TestingMode;
use vapt_intake_core::TextField;
use vapt_intake_core::WizardStep;
use vapt_intake_core::validate_step;
use vapt_intake_core::validate_submission;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Builds a form whose step 1-3 fields all pass validation.
fn completed_form() -> FormState {
    let mut form = FormState::new();
    form.set_text(TextField::OrganizationName, "Acme Corporation");
    form.set_text(TextField::PrimaryContactName, "Priya Sharma");
    form.set_text(TextField::Designation, "Security Lead");
    form.set_text(TextField::Email, "priya@acme.example");
    form.set_text(TextField::MobileNumber, "9876543210");
    form.set_assessment_type(Some(AssessmentType::ExternalNetwork));
    form.set_testing_mode(Some(TestingMode::Remote));
    form.set_text(TextField::IpRange, "10.0.0.0/24");
    form.set_text(TextField::DeviceCount, "0150");
    form.set_environment_type(Some(EnvironmentType::DataCenter));
    form
}

fn step(position: u8) -> WizardStep {
    WizardStep::new(position).unwrap()
}

/// Clones the completed form's draft for direct field manipulation.
fn completed_draft() -> SubmissionDraft {
    completed_form().draft().clone()
}

// ============================================================================
// SECTION: Step Bounds
// ============================================================================

#[test]
fn wizard_step_rejects_out_of_range_positions() {
    assert!(WizardStep::new(0).is_none());
    assert!(WizardStep::new(8).is_none());
    assert!(serde_json::from_str::<WizardStep>("0").is_err());
    assert!(serde_json::from_str::<WizardStep>("9").is_err());
    let restored: WizardStep = serde_json::from_str("3").expect("in-range step deserializes");
    assert_eq!(restored.get(), 3);
    assert_eq!(serde_json::to_string(&restored).expect("step serializes"), "3");
}

// ============================================================================
// SECTION: Step 1 Contact Rules
// ============================================================================

#[test]
fn step_one_passes_on_completed_form() {
    let form = completed_form();
    assert!(validate_step(step(1), form.draft()).is_ok());
}

#[test]
fn step_one_flags_every_missing_required_field_at_once() {
    let form = FormState::new();
    let report = validate_step(step(1), form.draft());
    assert!(!report.is_ok());
    assert_eq!(report.errors.len(), 5);
    assert!(report.errors.is_flagged(Field::OrganizationName));
    assert!(report.errors.is_flagged(Field::PrimaryContactName));
    assert!(report.errors.is_flagged(Field::Designation));
    assert!(report.errors.is_flagged(Field::Email));
    assert!(report.errors.is_flagged(Field::MobileNumber));
    let diagnostic = report.diagnostic.unwrap();
    assert_eq!(diagnostic.title, "Missing Information");
    assert_eq!(
        diagnostic.detail,
        "Please fill in all required fields (Organization Name, Contact Name, Designation, \
         Email, Mobile Number)."
    );
}

#[test]
fn step_one_rejects_malformed_email_after_presence_check() {
    let mut form = completed_form();
    form.set_text(TextField::Email, "not-an-email");
    let report = validate_step(step(1), form.draft());
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors.is_flagged(Field::Email));
    assert_eq!(report.diagnostic.unwrap().title, "Invalid Email");
}

#[test]
fn step_one_checks_secondary_contact_only_when_present() {
    let mut form = completed_form();
    assert!(validate_step(step(1), form.draft()).is_ok());

    form.set_text(TextField::SecondaryEmail, "broken@@example.com");
    let report = validate_step(step(1), form.draft());
    assert!(report.errors.is_flagged(Field::SecondaryEmail));
    assert_eq!(report.diagnostic.unwrap().title, "Invalid Secondary Email");

    form.set_text(TextField::SecondaryEmail, "backup@acme.example");
    form.set_text(TextField::SecondaryMobileNumber, "123");
    let report = validate_step(step(1), form.draft());
    assert!(report.errors.is_flagged(Field::SecondaryMobileNumber));
}

#[test]
fn step_one_rejects_contact_name_with_digits() {
    // The mutation path strips digits, so a digit-bearing name can only enter
    // from a restored or externally built draft.
    let mut draft = completed_draft();
    draft.primary_contact_name = "John2".to_string();
    let report = validate_step(step(1), &draft);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors.is_flagged(Field::PrimaryContactName));
    let diagnostic = report.diagnostic.unwrap();
    assert_eq!(diagnostic.title, "Invalid Contact Name");
    assert_eq!(diagnostic.detail, "Primary contact name must contain only alphabets and spaces.");
}

#[test]
fn step_one_rejects_designation_with_digits() {
    let mut draft = completed_draft();
    draft.designation = "CISO L2".to_string();
    let report = validate_step(step(1), &draft);
    assert!(report.errors.is_flagged(Field::Designation));
    let diagnostic = report.diagnostic.unwrap();
    assert_eq!(diagnostic.title, "Invalid Designation");
    assert_eq!(diagnostic.detail, "Designation must contain only alphabets and spaces.");
}

#[test]
fn step_one_rejects_short_mobile_number() {
    let mut form = completed_form();
    form.set_text(TextField::MobileNumber, "98765");
    let report = validate_step(step(1), form.draft());
    assert!(report.errors.is_flagged(Field::MobileNumber));
    assert_eq!(
        report.diagnostic.unwrap().detail,
        "Mobile number must be 10 digits and start with 6, 7, 8, or 9."
    );
}

// ============================================================================
// SECTION: Step 2 Scope Rules
// ============================================================================

#[test]
fn step_two_requires_both_selections_before_ip_checks() {
    let mut form = completed_form();
    form.set_assessment_type(None);
    form.set_testing_mode(None);
    form.set_text(TextField::IpRange, "not an ip !!");
    let report = validate_step(step(2), form.draft());
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.is_flagged(Field::AssessmentType));
    assert!(report.errors.is_flagged(Field::TestingMode));
    assert_eq!(
        report.diagnostic.unwrap().detail,
        "Please select assessment type and testing mode."
    );
}

#[test]
fn step_two_rejects_malformed_ip_range() {
    let mut form = completed_form();
    form.set_text(TextField::IpRange, "10.0.0.one");
    let report = validate_step(step(2), form.draft());
    assert!(report.errors.is_flagged(Field::IpRange));
    assert_eq!(report.diagnostic.unwrap().title, "Invalid IP Range");
}

#[test]
fn step_two_checks_public_ips_only_when_present() {
    let mut form = completed_form();
    assert!(validate_step(step(2), form.draft()).is_ok());

    form.set_text(TextField::PublicIps, "not-an-ip!");
    let report = validate_step(step(2), form.draft());
    assert!(report.errors.is_flagged(Field::PublicIps));
    assert_eq!(report.diagnostic.unwrap().title, "Invalid Public IP Addresses");
}

// ============================================================================
// SECTION: Step 3 Environment Rules
// ============================================================================

#[test]
fn step_three_requires_device_count_then_shape_then_environment() {
    let mut form = completed_form();
    form.set_text(TextField::DeviceCount, "");
    let report = validate_step(step(3), form.draft());
    assert!(report.errors.is_flagged(Field::DeviceCount));
    assert_eq!(report.diagnostic.unwrap().title, "Missing Information");

    form.set_text(TextField::DeviceCount, "12");
    let report = validate_step(step(3), form.draft());
    assert!(report.errors.is_flagged(Field::DeviceCount));
    assert_eq!(report.diagnostic.unwrap().detail, "Device count must be exactly 4 digits.");

    form.set_text(TextField::DeviceCount, "0012");
    form.set_environment_type(None);
    let report = validate_step(step(3), form.draft());
    assert!(report.errors.is_flagged(Field::EnvironmentType));
}

// ============================================================================
// SECTION: Step 5 Access Rules
// ============================================================================

#[test]
fn step_five_requires_at_least_one_access_path() {
    let form = FormState::new();
    let report = validate_step(step(5), form.draft());
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.is_flagged(Field::VpnAccess));
    assert!(report.errors.is_flagged(Field::TestCredentials));
    assert_eq!(
        report.diagnostic.unwrap().detail,
        "Please select at least one access requirement (VPN access or Test credentials)."
    );
}

#[test]
fn step_five_requires_account_type_with_test_credentials() {
    let mut form = FormState::new();
    form.set_flag(FlagField::TestCredentials, true);
    let report = validate_step(step(5), form.draft());
    assert!(report.errors.is_flagged(Field::AccountType));
    assert_eq!(
        report.diagnostic.unwrap().detail,
        "Please select the type of account when test credentials are required."
    );

    form.set_account_type(Some(AccountType::User));
    assert!(validate_step(step(5), form.draft()).is_ok());
}

#[test]
fn step_five_passes_with_vpn_access_alone() {
    let mut form = FormState::new();
    form.set_flag(FlagField::VpnAccess, true);
    assert!(validate_step(step(5), form.draft()).is_ok());
}

// ============================================================================
// SECTION: Step 6 Reporting Rules
// ============================================================================

#[test]
fn step_six_requires_format_then_retesting_answer() {
    let mut form = FormState::new();
    let report = validate_step(step(6), form.draft());
    assert!(report.errors.is_flagged(Field::ReportFormat));
    assert_eq!(report.diagnostic.unwrap().detail, "Please select a report format.");

    form.set_report_format(Some(ReportFormat::Technical));
    let report = validate_step(step(6), form.draft());
    assert!(report.errors.is_flagged(Field::RetestingRequired));
    assert_eq!(
        report.diagnostic.unwrap().detail,
        "Please confirm if retesting is required."
    );

    form.set_flag(FlagField::RetestingRequired, false);
    assert!(validate_step(step(6), form.draft()).is_ok());
}

// ============================================================================
// SECTION: Unvalidated Steps
// ============================================================================

#[test]
fn steps_four_and_seven_always_pass() {
    let form = FormState::new();
    assert!(validate_step(step(4), form.draft()).is_ok());
    assert!(validate_step(step(7), form.draft()).is_ok());
}

// ============================================================================
// SECTION: Final Submission Union
// ============================================================================

#[test]
fn submission_union_passes_on_completed_form() {
    let form = completed_form();
    let report = validate_submission(form.draft());
    assert!(report.is_ok());
    assert!(report.errors.is_empty());
}

#[test]
fn submission_union_catches_fields_invalidated_after_step_passed() {
    let mut form = completed_form();
    // The scope step passed earlier; blanking the IP range afterwards must
    // still block the final submission.
    form.set_text(TextField::IpRange, "");
    let report = validate_submission(form.draft());
    assert!(!report.is_ok());
    assert!(report.errors.is_flagged(Field::IpRange));
}

#[test]
fn submission_union_reports_contact_failures_first() {
    let mut form = completed_form();
    form.set_text(TextField::Email, "bad@@email");
    form.set_text(TextField::DeviceCount, "");
    let report = validate_submission(form.draft());
    assert!(report.errors.is_flagged(Field::Email));
    assert!(!report.errors.is_flagged(Field::DeviceCount));
    assert_eq!(report.diagnostic.unwrap().title, "Invalid Email");
}
