// crates/vapt-intake-core/src/core/fields.rs
// ============================================================================
// Module: VAPT Intake Field Identifiers
// Description: Canonical field identifiers and single-choice selection enums.
// Purpose: Provide strongly typed, serializable field names with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the canonical identifiers for every wizard field plus
//! the enumerations backing the single-choice fields. Wire labels match the
//! original intake form verbatim so stored submissions and email digests stay
//! readable by the assessment team.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Field Identifiers
// ============================================================================

/// Identifier for a wizard field, used by error flags and mutation paths.
///
/// # Invariants
/// - `as_str` labels are stable and match the stored submission keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Organization name.
    OrganizationName,
    /// Primary contact name.
    PrimaryContactName,
    /// Primary contact designation.
    Designation,
    /// Primary contact email.
    Email,
    /// Primary contact mobile number.
    MobileNumber,
    /// Secondary contact name.
    SecondaryContactName,
    /// Secondary contact email.
    SecondaryEmail,
    /// Secondary contact mobile number.
    SecondaryMobileNumber,
    /// Assessment type selection.
    AssessmentType,
    /// Testing mode selection.
    TestingMode,
    /// Compliance-required flag.
    ComplianceRequired,
    /// Compliance type free text.
    ComplianceType,
    /// In-scope IP range.
    IpRange,
    /// Public IP addresses.
    PublicIps,
    /// Exclude-systems flag.
    ExcludeSystems,
    /// Excluded systems free text.
    ExcludedSystemsList,
    /// Device count.
    DeviceCount,
    /// Environment type selection.
    EnvironmentType,
    /// Testing window selection.
    TestingWindow,
    /// Notify-before-testing flag.
    NotifyBeforeTesting,
    /// VPN-access flag.
    VpnAccess,
    /// Test-credentials flag.
    TestCredentials,
    /// Account type selection.
    AccountType,
    /// Report format selection.
    ReportFormat,
    /// Retesting-required answer.
    RetestingRequired,
    /// Permission-approved flag.
    PermissionApproved,
    /// Approver name.
    ApproverName,
    /// Approver designation.
    ApproverDesignation,
    /// Additional notes free text.
    AdditionalNotes,
}

impl Field {
    /// Returns the stable field label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrganizationName => "organizationName",
            Self::PrimaryContactName => "primaryContactName",
            Self::Designation => "designation",
            Self::Email => "email",
            Self::MobileNumber => "mobileNumber",
            Self::SecondaryContactName => "secondaryContactName",
            Self::SecondaryEmail => "secondaryEmail",
            Self::SecondaryMobileNumber => "secondaryMobileNumber",
            Self::AssessmentType => "assessmentType",
            Self::TestingMode => "testingMode",
            Self::ComplianceRequired => "complianceRequired",
            Self::ComplianceType => "complianceType",
            Self::IpRange => "ipRange",
            Self::PublicIps => "publicIPs",
            Self::ExcludeSystems => "excludeSystems",
            Self::ExcludedSystemsList => "excludedSystemsList",
            Self::DeviceCount => "deviceCount",
            Self::EnvironmentType => "environmentType",
            Self::TestingWindow => "testingWindow",
            Self::NotifyBeforeTesting => "notifyBeforeTesting",
            Self::VpnAccess => "vpnAccess",
            Self::TestCredentials => "testCredentials",
            Self::AccountType => "accountType",
            Self::ReportFormat => "reportFormat",
            Self::RetestingRequired => "retestingRequired",
            Self::PermissionApproved => "permissionApproved",
            Self::ApproverName => "approverName",
            Self::ApproverDesignation => "approverDesignation",
            Self::AdditionalNotes => "additionalNotes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Mutation Groups
// ============================================================================

/// Free-text fields settable through [`crate::FormState::set_text`].
///
/// # Invariants
/// - Every variant maps to exactly one [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    /// Organization name.
    OrganizationName,
    /// Primary contact name (alphabetic-normalized).
    PrimaryContactName,
    /// Primary contact designation (alphabetic-normalized).
    Designation,
    /// Primary contact email.
    Email,
    /// Primary contact mobile number (digits-only, max 10).
    MobileNumber,
    /// Secondary contact name.
    SecondaryContactName,
    /// Secondary contact email.
    SecondaryEmail,
    /// Secondary contact mobile number (digits-only, max 10).
    SecondaryMobileNumber,
    /// Compliance type free text.
    ComplianceType,
    /// In-scope IP range.
    IpRange,
    /// Public IP addresses.
    PublicIps,
    /// Excluded systems free text.
    ExcludedSystemsList,
    /// Device count (digits-only, max 4).
    DeviceCount,
    /// Approver name.
    ApproverName,
    /// Approver designation.
    ApproverDesignation,
    /// Additional notes free text.
    AdditionalNotes,
}

impl TextField {
    /// Returns the field identifier for this text field.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::OrganizationName => Field::OrganizationName,
            Self::PrimaryContactName => Field::PrimaryContactName,
            Self::Designation => Field::Designation,
            Self::Email => Field::Email,
            Self::MobileNumber => Field::MobileNumber,
            Self::SecondaryContactName => Field::SecondaryContactName,
            Self::SecondaryEmail => Field::SecondaryEmail,
            Self::SecondaryMobileNumber => Field::SecondaryMobileNumber,
            Self::ComplianceType => Field::ComplianceType,
            Self::IpRange => Field::IpRange,
            Self::PublicIps => Field::PublicIps,
            Self::ExcludedSystemsList => Field::ExcludedSystemsList,
            Self::DeviceCount => Field::DeviceCount,
            Self::ApproverName => Field::ApproverName,
            Self::ApproverDesignation => Field::ApproverDesignation,
            Self::AdditionalNotes => Field::AdditionalNotes,
        }
    }
}

/// Boolean fields settable through [`crate::FormState::set_flag`].
///
/// # Invariants
/// - Every variant maps to exactly one [`Field`].
/// - `TestCredentials = false` clears the account type in the same mutation.
/// - `RetestingRequired` records an explicit answer; the backing field is
///   tri-state and starts unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagField {
    /// Compliance-required flag.
    ComplianceRequired,
    /// Exclude-systems flag.
    ExcludeSystems,
    /// Notify-before-testing flag.
    NotifyBeforeTesting,
    /// VPN-access flag.
    VpnAccess,
    /// Test-credentials flag.
    TestCredentials,
    /// Retesting-required answer.
    RetestingRequired,
    /// Permission-approved flag.
    PermissionApproved,
}

impl FlagField {
    /// Returns the field identifier for this flag field.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::ComplianceRequired => Field::ComplianceRequired,
            Self::ExcludeSystems => Field::ExcludeSystems,
            Self::NotifyBeforeTesting => Field::NotifyBeforeTesting,
            Self::VpnAccess => Field::VpnAccess,
            Self::TestCredentials => Field::TestCredentials,
            Self::RetestingRequired => Field::RetestingRequired,
            Self::PermissionApproved => Field::PermissionApproved,
        }
    }
}

// ============================================================================
// SECTION: Selection Enums
// ============================================================================

/// Type of assessment requested.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    /// External network VAPT.
    ExternalNetwork,
    /// Internal network VAPT.
    InternalNetwork,
    /// Both external and internal.
    Both,
}

impl AssessmentType {
    /// Returns the form label for this assessment type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExternalNetwork => "External Network VAPT",
            Self::InternalNetwork => "Internal Network VAPT",
            Self::Both => "Both",
        }
    }
}

/// Mode of testing requested.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestingMode {
    /// In-house / on-site testing.
    OnSite,
    /// Remote testing.
    Remote,
    /// Hybrid remote plus on-site testing.
    Hybrid,
}

impl TestingMode {
    /// Returns the form label for this testing mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSite => "In-house / On-site Testing",
            Self::Remote => "Remote Testing",
            Self::Hybrid => "Hybrid (Remote + On-site)",
        }
    }
}

/// Environment hosting the in-scope network.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentType {
    /// Office network.
    Office,
    /// Data-center network.
    DataCenter,
    /// Cloud-hosted environment.
    Cloud,
    /// Hybrid environment.
    Hybrid,
}

impl EnvironmentType {
    /// Returns the form label for this environment type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Office => "Office",
            Self::DataCenter => "Data Center",
            Self::Cloud => "Cloud",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Preferred testing window.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestingWindow {
    /// Business hours.
    BusinessHours,
    /// Non-business hours.
    NonBusinessHours,
    /// Weekend.
    Weekend,
    /// No preference.
    NoPreference,
}

impl TestingWindow {
    /// Returns the form label for this testing window.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BusinessHours => "Business Hours",
            Self::NonBusinessHours => "Non-Business Hours",
            Self::Weekend => "Weekend",
            Self::NoPreference => "No Preference",
        }
    }
}

/// Restriction tag applicable during testing.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    /// Avoid heavy scanning.
    AvoidHeavyScanning,
    /// Avoid brute force testing.
    AvoidBruteForce,
    /// Avoid DoS-like tests.
    AvoidDosTests,
    /// No restrictions.
    NoRestrictions,
}

impl Restriction {
    /// Returns the form label for this restriction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AvoidHeavyScanning => "Avoid heavy scanning",
            Self::AvoidBruteForce => "Avoid brute force testing",
            Self::AvoidDosTests => "Avoid DoS-like tests",
            Self::NoRestrictions => "No restrictions",
        }
    }
}

/// Account type for provided test credentials.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Standard user account.
    User,
    /// Administrative account.
    Admin,
}

impl AccountType {
    /// Returns the form label for this account type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// Report format requested for deliverables.
///
/// # Invariants
/// - Variants are stable for serialization; display labels match the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Technical report only.
    Technical,
    /// Technical report plus management summary.
    TechnicalAndManagement,
}

impl ReportFormat {
    /// Returns the form label for this report format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "Technical Report",
            Self::TechnicalAndManagement => "Technical + Management Summary",
        }
    }
}
