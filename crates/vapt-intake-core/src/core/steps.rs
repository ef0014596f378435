// crates/vapt-intake-core/src/core/steps.rs
// ============================================================================
// Module: VAPT Intake Step Validation
// Description: Wizard step positions, diagnostics, and per-step rule sets.
// Purpose: Gate step advancement and final submission on ordered field rules.
// Dependencies: crate::core::{draft, fields, validators}, serde
// ============================================================================

//! ## Overview
//! Each wizard step carries a fixed, ordered rule set. Validation evaluates
//! the rules in order and stops at the first violation, producing a fresh
//! [`FieldErrors`] set for the offending field(s) and exactly one
//! human-readable [`Diagnostic`]. Steps 4 and 7 have no required fields and
//! always pass. Final submission re-runs the union of the step 1-3 rule sets
//! so back/forward navigation cannot smuggle an invalidated field past the
//! gate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::draft::FieldErrors;
use crate::core::draft::SubmissionDraft;
use crate::core::fields::Field;
use crate::core::validators::is_alphabetic_name;
use crate::core::validators::is_valid_device_count;
use crate::core::validators::is_valid_email;
use crate::core::validators::is_valid_ip_token;
use crate::core::validators::is_valid_mobile;

// ============================================================================
// SECTION: Wizard Steps
// ============================================================================

/// Number of wizard steps.
pub const TOTAL_STEPS: u8 = 7;

/// Wizard step position.
///
/// # Invariants
/// - Always within `1..=TOTAL_STEPS`; deserialization routes through
///   [`WizardStep::new`] so out-of-range positions are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct WizardStep(u8);

impl WizardStep {
    /// First wizard step.
    pub const FIRST: Self = Self(1);
    /// Final wizard step.
    pub const FINAL: Self = Self(TOTAL_STEPS);

    /// Creates a step from a raw position (returns `None` out of range).
    #[must_use]
    pub const fn new(position: u8) -> Option<Self> {
        if position >= 1 && position <= TOTAL_STEPS {
            Some(Self(position))
        } else {
            None
        }
    }

    /// Returns the 1-based step position.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the next step, saturating at the final step.
    #[must_use]
    pub const fn advanced(self) -> Self {
        if self.0 < TOTAL_STEPS {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Returns the previous step, saturating at the first step.
    #[must_use]
    pub const fn retreated(self) -> Self {
        if self.0 > 1 {
            Self(self.0 - 1)
        } else {
            self
        }
    }

    /// Returns true for the final step.
    #[must_use]
    pub const fn is_final(self) -> bool {
        self.0 == TOTAL_STEPS
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for WizardStep {
    type Error = String;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        Self::new(position).ok_or_else(|| {
            format!("wizard step must be between 1 and {TOTAL_STEPS}, got {position}")
        })
    }
}

impl From<WizardStep> for u8 {
    fn from(step: WizardStep) -> Self {
        step.0
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// Single user-facing diagnostic describing the first violated rule.
///
/// # Invariants
/// - `title` and `detail` are stable, human-readable strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Short diagnostic title.
    pub title: String,
    /// Detailed guidance for correcting the input.
    pub detail: String,
}

impl Diagnostic {
    /// Creates a diagnostic from title and detail strings.
    #[must_use]
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}

/// Outcome of a validation pass.
///
/// # Invariants
/// - `diagnostic` is present iff at least one field is flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Fields flagged by the first violated rule.
    pub errors: FieldErrors,
    /// Diagnostic for the first violated rule, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl StepReport {
    /// Creates a passing report.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            errors: FieldErrors::new(),
            diagnostic: None,
        }
    }

    /// Creates a failing report from flagged fields plus a diagnostic.
    #[must_use]
    pub fn fail(errors: FieldErrors, title: &str, detail: &str) -> Self {
        Self {
            errors,
            diagnostic: Some(Diagnostic::new(title, detail)),
        }
    }

    /// Returns true when the validation pass found no violation.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.diagnostic.is_none()
    }
}

/// Flags a single field and fails with the given diagnostic.
fn fail_field(field: Field, title: &str, detail: &str) -> StepReport {
    let mut errors = FieldErrors::new();
    errors.flag(field);
    StepReport::fail(errors, title, detail)
}

// ============================================================================
// SECTION: Step Rule Sets
// ============================================================================

/// Validates the rule set for `step` against `draft`.
///
/// Rules are evaluated in a fixed order per step; the first violation wins
/// and short-circuits the rest. The returned error set replaces any previous
/// one.
#[must_use]
pub fn validate_step(step: WizardStep, draft: &SubmissionDraft) -> StepReport {
    match step.get() {
        1 => validate_contact(draft),
        2 => validate_scope(draft),
        3 => validate_environment(draft),
        5 => validate_access(draft),
        6 => validate_reporting(draft),
        _ => StepReport::pass(),
    }
}

/// Validates the union of the step 1-3 rule sets before final submission.
#[must_use]
pub fn validate_submission(draft: &SubmissionDraft) -> StepReport {
    let contact = validate_contact(draft);
    if !contact.is_ok() {
        return contact;
    }
    let scope = validate_scope(draft);
    if !scope.is_ok() {
        return scope;
    }
    validate_environment(draft)
}

/// Step 1: organization and contact details.
fn validate_contact(draft: &SubmissionDraft) -> StepReport {
    let mut missing = FieldErrors::new();
    if draft.organization_name.is_empty() {
        missing.flag(Field::OrganizationName);
    }
    if draft.primary_contact_name.is_empty() {
        missing.flag(Field::PrimaryContactName);
    }
    if draft.designation.trim().is_empty() {
        missing.flag(Field::Designation);
    }
    if draft.email.is_empty() {
        missing.flag(Field::Email);
    }
    if draft.mobile_number.is_empty() {
        missing.flag(Field::MobileNumber);
    }
    if !missing.is_empty() {
        return StepReport::fail(
            missing,
            "Missing Information",
            "Please fill in all required fields (Organization Name, Contact Name, Designation, \
             Email, Mobile Number).",
        );
    }
    if !is_valid_email(&draft.email) {
        return fail_field(Field::Email, "Invalid Email", "Please enter a valid email address.");
    }
    if !draft.secondary_email.is_empty() && !is_valid_email(&draft.secondary_email) {
        return fail_field(
            Field::SecondaryEmail,
            "Invalid Secondary Email",
            "Please enter a valid secondary email address.",
        );
    }
    if !is_alphabetic_name(&draft.primary_contact_name) {
        return fail_field(
            Field::PrimaryContactName,
            "Invalid Contact Name",
            "Primary contact name must contain only alphabets and spaces.",
        );
    }
    if !is_alphabetic_name(&draft.designation) {
        return fail_field(
            Field::Designation,
            "Invalid Designation",
            "Designation must contain only alphabets and spaces.",
        );
    }
    if !is_valid_mobile(&draft.mobile_number) {
        return fail_field(
            Field::MobileNumber,
            "Invalid Mobile Number",
            "Mobile number must be 10 digits and start with 6, 7, 8, or 9.",
        );
    }
    if !draft.secondary_mobile_number.is_empty() && !is_valid_mobile(&draft.secondary_mobile_number)
    {
        return fail_field(
            Field::SecondaryMobileNumber,
            "Invalid Secondary Mobile Number",
            "Secondary mobile number must be 10 digits and start with 6, 7, 8, or 9.",
        );
    }
    StepReport::pass()
}

/// Step 2: assessment scope.
fn validate_scope(draft: &SubmissionDraft) -> StepReport {
    let mut missing = FieldErrors::new();
    if draft.assessment_type.is_none() {
        missing.flag(Field::AssessmentType);
    }
    if draft.testing_mode.is_none() {
        missing.flag(Field::TestingMode);
    }
    if !missing.is_empty() {
        return StepReport::fail(
            missing,
            "Missing Information",
            "Please select assessment type and testing mode.",
        );
    }
    if !is_valid_ip_token(&draft.ip_range) {
        return fail_field(
            Field::IpRange,
            "Invalid IP Range",
            "Please enter a valid IP address, IP range (e.g., 192.168.1.0-192.168.1.255), or \
             CIDR notation (e.g., 192.168.1.0/24).",
        );
    }
    if !draft.public_ips.is_empty() && !is_valid_ip_token(&draft.public_ips) {
        return fail_field(
            Field::PublicIps,
            "Invalid Public IP Addresses",
            "Please enter a valid IP address, IP range, or CIDR notation for public IPs.",
        );
    }
    StepReport::pass()
}

/// Step 3: network environment.
fn validate_environment(draft: &SubmissionDraft) -> StepReport {
    if draft.device_count.trim().is_empty() {
        return fail_field(
            Field::DeviceCount,
            "Missing Information",
            "Please enter the number of devices in scope.",
        );
    }
    if !is_valid_device_count(&draft.device_count) {
        return fail_field(
            Field::DeviceCount,
            "Invalid Device Count",
            "Device count must be exactly 4 digits.",
        );
    }
    if draft.environment_type.is_none() {
        return fail_field(
            Field::EnvironmentType,
            "Missing Information",
            "Please enter the environment type.",
        );
    }
    StepReport::pass()
}

/// Step 5: access requirements.
fn validate_access(draft: &SubmissionDraft) -> StepReport {
    if !draft.vpn_access && !draft.test_credentials {
        let mut errors = FieldErrors::new();
        errors.flag(Field::VpnAccess);
        errors.flag(Field::TestCredentials);
        return StepReport::fail(
            errors,
            "Missing Information",
            "Please select at least one access requirement (VPN access or Test credentials).",
        );
    }
    if draft.test_credentials && draft.account_type.is_none() {
        return fail_field(
            Field::AccountType,
            "Missing Information",
            "Please select the type of account when test credentials are required.",
        );
    }
    StepReport::pass()
}

/// Step 6: reporting requirements.
fn validate_reporting(draft: &SubmissionDraft) -> StepReport {
    if draft.report_format.is_none() {
        return fail_field(
            Field::ReportFormat,
            "Missing Information",
            "Please select a report format.",
        );
    }
    if draft.retesting_required.is_none() {
        return fail_field(
            Field::RetestingRequired,
            "Missing Information",
            "Please confirm if retesting is required.",
        );
    }
    StepReport::pass()
}
