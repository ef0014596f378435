// crates/vapt-intake-core/src/core/draft.rs
// ============================================================================
// Module: VAPT Intake Form State
// Description: Submission draft record, error flags, and normalizing mutations.
// Purpose: Hold wizard field values with invariants enforced at mutation time.
// Dependencies: crate::core::fields, serde
// ============================================================================

//! ## Overview
//! [`SubmissionDraft`] is the mutable record behind the wizard. Invalid values
//! are representable on purpose: validation happens at step boundaries, not
//! continuously. The exceptions are the normalizing fields (digits-only and
//! alphabetic-only inputs), which are made unrepresentable by the mutation
//! path so the draft can never transiently hold a stray character.
//!
//! [`FieldErrors`] is a value-type side table of per-field invalid markers.
//! Validation passes replace it wholesale; edits clear the edited field's
//! marker immediately.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::fields::AccountType;
use crate::core::fields::AssessmentType;
use crate::core::fields::EnvironmentType;
use crate::core::fields::Field;
use crate::core::fields::FlagField;
use crate::core::fields::ReportFormat;
use crate::core::fields::Restriction;
use crate::core::fields::TestingMode;
use crate::core::fields::TestingWindow;
use crate::core::fields::TextField;

// ============================================================================
// SECTION: Normalization Limits
// ============================================================================

/// Maximum digits stored for a mobile number.
const MOBILE_MAX_DIGITS: usize = 10;
/// Maximum digits stored for the device count.
const DEVICE_COUNT_MAX_DIGITS: usize = 4;

// ============================================================================
// SECTION: Submission Draft
// ============================================================================

/// Mutable intake record owned by the wizard while a submission is in
/// progress.
///
/// # Invariants
/// - `device_count` holds only ASCII digits, at most 4.
/// - `mobile_number` and `secondary_mobile_number` hold only ASCII digits,
///   at most 10.
/// - `primary_contact_name` and `designation` hold only letters and spaces.
/// - `account_type` is `None` whenever `test_credentials` is false.
/// - `restrictions` preserves insertion order and contains no duplicates.
/// - `retesting_required` is tri-state: `None` means the question was never
///   answered and blocks submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDraft {
    /// Organization name.
    pub organization_name: String,
    /// Primary contact name (letters and spaces only).
    pub primary_contact_name: String,
    /// Primary contact designation (letters and spaces only).
    pub designation: String,
    /// Primary contact email.
    pub email: String,
    /// Primary contact mobile number (digits only, at most 10).
    pub mobile_number: String,
    /// Secondary contact name.
    pub secondary_contact_name: String,
    /// Secondary contact email.
    pub secondary_email: String,
    /// Secondary contact mobile number (digits only, at most 10).
    pub secondary_mobile_number: String,
    /// Assessment type selection.
    pub assessment_type: Option<AssessmentType>,
    /// Testing mode selection.
    pub testing_mode: Option<TestingMode>,
    /// Compliance-required flag.
    pub compliance_required: bool,
    /// Compliance type free text.
    pub compliance_type: String,
    /// In-scope IP range.
    pub ip_range: String,
    /// Public IP addresses.
    #[serde(rename = "publicIPs")]
    pub public_ips: String,
    /// Exclude-systems flag.
    pub exclude_systems: bool,
    /// Excluded systems free text.
    pub excluded_systems_list: String,
    /// Device count (digits only, at most 4).
    pub device_count: String,
    /// Environment type selection.
    pub environment_type: Option<EnvironmentType>,
    /// Testing window selection.
    pub testing_window: Option<TestingWindow>,
    /// Restriction tags in insertion order.
    pub restrictions: Vec<Restriction>,
    /// Notify-before-testing flag.
    pub notify_before_testing: bool,
    /// VPN-access flag.
    pub vpn_access: bool,
    /// Test-credentials flag.
    pub test_credentials: bool,
    /// Account type, meaningful only while `test_credentials` is true.
    pub account_type: Option<AccountType>,
    /// Report format selection.
    pub report_format: Option<ReportFormat>,
    /// Retesting-required answer; `None` until explicitly answered.
    pub retesting_required: Option<bool>,
    /// Permission-approved flag.
    pub permission_approved: bool,
    /// Approver name.
    pub approver_name: String,
    /// Approver designation.
    pub approver_designation: String,
    /// Additional notes free text.
    pub additional_notes: String,
}

// ============================================================================
// SECTION: Field Error Set
// ============================================================================

/// Value-type set of fields flagged invalid by the latest validation pass.
///
/// # Invariants
/// - Produced fresh per validation pass; callers replace, never merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeSet<Field>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Flags `field` as invalid.
    pub fn flag(&mut self, field: Field) {
        self.0.insert(field);
    }

    /// Clears the marker for `field`, if present.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    /// Returns true when `field` is flagged.
    #[must_use]
    pub fn is_flagged(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    /// Returns true when no field is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of flagged fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the flagged fields in identifier order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }
}

// ============================================================================
// SECTION: Form State
// ============================================================================

/// Draft plus its error side table, mutated only through normalizing
/// operations.
///
/// # Invariants
/// - Mutations never fail; normalization is applied before storage.
/// - Editing a field clears its error marker in the same operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current draft values.
    draft: SubmissionDraft,
    /// Error markers from the latest validation pass.
    errors: FieldErrors,
}

impl FormState {
    /// Creates an empty form state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    /// Returns the current error markers.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Replaces the error set with the result of a validation pass.
    pub fn replace_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Stores `raw` into `field` after field-specific normalization and
    /// clears the field's error marker.
    pub fn set_text(&mut self, field: TextField, raw: &str) {
        let value = normalize_text(field, raw);
        let slot = match field {
            TextField::OrganizationName => &mut self.draft.organization_name,
            TextField::PrimaryContactName => &mut self.draft.primary_contact_name,
            TextField::Designation => &mut self.draft.designation,
            TextField::Email => &mut self.draft.email,
            TextField::MobileNumber => &mut self.draft.mobile_number,
            TextField::SecondaryContactName => &mut self.draft.secondary_contact_name,
            TextField::SecondaryEmail => &mut self.draft.secondary_email,
            TextField::SecondaryMobileNumber => &mut self.draft.secondary_mobile_number,
            TextField::ComplianceType => &mut self.draft.compliance_type,
            TextField::IpRange => &mut self.draft.ip_range,
            TextField::PublicIps => &mut self.draft.public_ips,
            TextField::ExcludedSystemsList => &mut self.draft.excluded_systems_list,
            TextField::DeviceCount => &mut self.draft.device_count,
            TextField::ApproverName => &mut self.draft.approver_name,
            TextField::ApproverDesignation => &mut self.draft.approver_designation,
            TextField::AdditionalNotes => &mut self.draft.additional_notes,
        };
        *slot = value;
        self.errors.clear(field.field());
    }

    /// Sets a boolean field and clears its error marker.
    ///
    /// Unsetting `TestCredentials` also clears the account type so it is
    /// never left stale. `RetestingRequired` records an explicit answer in
    /// the tri-state backing field.
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        match field {
            FlagField::ComplianceRequired => self.draft.compliance_required = value,
            FlagField::ExcludeSystems => self.draft.exclude_systems = value,
            FlagField::NotifyBeforeTesting => self.draft.notify_before_testing = value,
            FlagField::VpnAccess => self.draft.vpn_access = value,
            FlagField::TestCredentials => {
                self.draft.test_credentials = value;
                if !value {
                    self.draft.account_type = None;
                    self.errors.clear(Field::AccountType);
                }
            }
            FlagField::RetestingRequired => self.draft.retesting_required = Some(value),
            FlagField::PermissionApproved => self.draft.permission_approved = value,
        }
        self.errors.clear(field.field());
    }

    /// Adds or removes a restriction tag, preserving insertion order.
    pub fn toggle_restriction(&mut self, restriction: Restriction, included: bool) {
        if included {
            if !self.draft.restrictions.contains(&restriction) {
                self.draft.restrictions.push(restriction);
            }
        } else {
            self.draft.restrictions.retain(|entry| *entry != restriction);
        }
    }

    /// Sets the assessment type selection and clears its error marker.
    pub fn set_assessment_type(&mut self, value: Option<AssessmentType>) {
        self.draft.assessment_type = value;
        self.errors.clear(Field::AssessmentType);
    }

    /// Sets the testing mode selection and clears its error marker.
    pub fn set_testing_mode(&mut self, value: Option<TestingMode>) {
        self.draft.testing_mode = value;
        self.errors.clear(Field::TestingMode);
    }

    /// Sets the environment type selection and clears its error marker.
    pub fn set_environment_type(&mut self, value: Option<EnvironmentType>) {
        self.draft.environment_type = value;
        self.errors.clear(Field::EnvironmentType);
    }

    /// Sets the testing window selection and clears its error marker.
    pub fn set_testing_window(&mut self, value: Option<TestingWindow>) {
        self.draft.testing_window = value;
        self.errors.clear(Field::TestingWindow);
    }

    /// Sets the account type selection and clears its error marker.
    pub fn set_account_type(&mut self, value: Option<AccountType>) {
        self.draft.account_type = value;
        self.errors.clear(Field::AccountType);
    }

    /// Sets the report format selection and clears its error marker.
    pub fn set_report_format(&mut self, value: Option<ReportFormat>) {
        self.draft.report_format = value;
        self.errors.clear(Field::ReportFormat);
    }
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Applies the field-specific input filter before storage.
fn normalize_text(field: TextField, raw: &str) -> String {
    match field {
        TextField::PrimaryContactName | TextField::Designation => {
            raw.chars().filter(|ch| ch.is_ascii_alphabetic() || *ch == ' ').collect()
        }
        TextField::MobileNumber | TextField::SecondaryMobileNumber => {
            digits_only(raw, MOBILE_MAX_DIGITS)
        }
        TextField::DeviceCount => digits_only(raw, DEVICE_COUNT_MAX_DIGITS),
        _ => raw.to_string(),
    }
}

/// Keeps only ASCII digits, truncated to `max` characters.
fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}
