// crates/vapt-intake-notify/src/digest.rs
// ============================================================================
// Module: Assessment Digest Rendering
// Description: Plain-text digest, title, and time formatting for notifications.
// Purpose: Render stored submissions into the outbound email template fields.
// Dependencies: vapt-intake-core
// ============================================================================

//! ## Overview
//! Renders a [`StoredSubmission`] into the sectioned plain-text digest carried
//! in the notification body. Formatting rules: empty text renders as `N/A`,
//! booleans as `Yes`/`No`, empty lists as `None`. Optional sections (secondary
//! contact, compliance, public IPs, excluded systems, account type, approver,
//! additional notes) are omitted entirely when their source fields are unset.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write;

use vapt_intake_core::StoredSubmission;
use vapt_intake_core::SubmissionDraft;

// ============================================================================
// SECTION: Value Formatting
// ============================================================================

/// Placeholder for absent text values.
const ABSENT: &str = "N/A";

/// Renders empty text as the `N/A` placeholder.
fn text(value: &str) -> &str {
    if value.is_empty() { ABSENT } else { value }
}

/// Renders an optional selection label, absent as `N/A`.
fn label(value: Option<&str>) -> &str {
    value.unwrap_or(ABSENT)
}

/// Renders a boolean as `Yes` or `No`.
const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

// ============================================================================
// SECTION: Digest Rendering
// ============================================================================

/// Renders the sectioned plain-text assessment digest.
#[must_use]
#[allow(clippy::too_many_lines, reason = "Single linear template, split adds nothing.")]
pub fn format_digest(submission: &StoredSubmission) -> String {
    let draft = &submission.draft;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Assessment Details  {} - {}\n",
        text(&draft.organization_name),
        text(&submission.submitted_date_time),
    );

    let _ = writeln!(out, "Organization Information");
    let _ = writeln!(out, "  Organization: {}", text(&draft.organization_name));
    let _ = writeln!(
        out,
        "  Contact: {} ({})",
        text(&draft.primary_contact_name),
        text(&draft.designation),
    );
    let _ = writeln!(out, "  Email: {}", text(&draft.email));
    let _ = writeln!(out, "  Mobile Number: {}", text(&draft.mobile_number));
    if !draft.secondary_contact_name.is_empty()
        || !draft.secondary_email.is_empty()
        || !draft.secondary_mobile_number.is_empty()
    {
        let _ = writeln!(out, "  Secondary Contact: {}", text(&draft.secondary_contact_name));
        let _ = writeln!(out, "  Secondary Email: {}", text(&draft.secondary_email));
        let _ = writeln!(out, "  Secondary Mobile: {}", text(&draft.secondary_mobile_number));
    }

    let _ = writeln!(out, "\nScope Information");
    let _ = writeln!(
        out,
        "  Assessment Type: {}",
        label(draft.assessment_type.map(|value| value.as_str())),
    );
    let _ = writeln!(out, "  Testing Mode: {}", label(draft.testing_mode.map(|value| value.as_str())));
    if draft.compliance_required {
        let _ = writeln!(out, "  Compliance Required: Yes");
        let _ = writeln!(out, "  Compliance Type: {}", text(&draft.compliance_type));
    }
    let _ = writeln!(out, "  IP Range: {}", text(&draft.ip_range));
    if !draft.public_ips.is_empty() {
        let _ = writeln!(out, "  Public IPs: {}", text(&draft.public_ips));
    }
    if draft.exclude_systems && !draft.excluded_systems_list.is_empty() {
        let _ = writeln!(out, "  Excluded Systems: {}", text(&draft.excluded_systems_list));
    }

    let _ = writeln!(out, "\nNetwork Environment");
    let _ = writeln!(out, "  Device Count: {}", text(&draft.device_count));
    let _ = writeln!(
        out,
        "  Environment: {}",
        label(draft.environment_type.map(|value| value.as_str())),
    );

    let _ = writeln!(out, "\nTesting Window");
    let _ = writeln!(
        out,
        "  Preferred Time: {}",
        label(draft.testing_window.map(|value| value.as_str())),
    );
    let restrictions = if draft.restrictions.is_empty() {
        "None".to_string()
    } else {
        draft
            .restrictions
            .iter()
            .map(|entry| entry.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    };
    let _ = writeln!(out, "  Restrictions: {restrictions}");
    let _ = writeln!(out, "  Notify Before Testing: {}", yes_no(draft.notify_before_testing));

    let _ = writeln!(out, "\nAccess Requirements");
    let _ = writeln!(out, "  VPN Access: {}", yes_no(draft.vpn_access));
    let _ = writeln!(out, "  Test Credentials: {}", yes_no(draft.test_credentials));
    if let Some(account_type) = draft.account_type {
        let _ = writeln!(out, "  Account Type: {}", account_type.as_str());
    }

    let _ = writeln!(out, "\nReporting");
    let _ = writeln!(
        out,
        "  Report Format: {}",
        label(draft.report_format.map(|value| value.as_str())),
    );
    let _ = writeln!(
        out,
        "  Retesting Required: {}",
        yes_no(draft.retesting_required.unwrap_or(false)),
    );

    let _ = writeln!(out, "\nAuthorization");
    if draft.permission_approved {
        let _ = writeln!(out, "  Permission Approved: Yes");
        if !draft.approver_name.is_empty() {
            let _ = writeln!(
                out,
                "  Approver: {} ({})",
                text(&draft.approver_name),
                text(&draft.approver_designation),
            );
        }
    } else {
        let _ = writeln!(out, "  Permission Approved: No");
    }

    if !draft.additional_notes.is_empty() {
        let _ = writeln!(out, "\nAdditional Notes");
        let _ = writeln!(out, "  {}", text(&draft.additional_notes));
    }

    let _ = writeln!(out, "\nSubmission Information");
    let _ = writeln!(out, "  IP Address: {}", submission.origin_address.as_str());
    out
}

// ============================================================================
// SECTION: Template Fields
// ============================================================================

/// Renders the notification subject line.
#[must_use]
pub fn format_title(draft: &SubmissionDraft) -> String {
    let organization = if draft.organization_name.is_empty() {
        "Unknown Organization"
    } else {
        draft.organization_name.as_str()
    };
    format!("VAPT Assessment Request - {organization}")
}

/// Renders the template time field as `HH.MM`.
#[must_use]
pub fn format_email_time(submission: &StoredSubmission) -> String {
    submission.submitted_time.replace(':', ".")
}

/// Renders the template name field: contact name, else organization, else
/// the `N/A` placeholder.
#[must_use]
pub fn format_contact_name(draft: &SubmissionDraft) -> String {
    if !draft.primary_contact_name.is_empty() {
        draft.primary_contact_name.clone()
    } else if !draft.organization_name.is_empty() {
        draft.organization_name.clone()
    } else {
        ABSENT.to_string()
    }
}
