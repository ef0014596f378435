// demos/minimal/src/main.rs
// ============================================================================
// Module: VAPT Intake Minimal Demo
// Description: Minimal end-to-end intake run using in-memory collaborators.
// Purpose: Demonstrate wizard navigation, submission, and digest rendering.
// Dependencies: vapt-intake-core, vapt-intake-notify
// ============================================================================

//! ## Overview
//! Drives a complete intake run in one process: fills the form, walks the
//! wizard through all seven steps, submits through the in-memory sink, and
//! renders the notification digest instead of delivering it.

use std::io::Write;

use vapt_intake_core::AccountType;
use vapt_intake_core::AssessmentType;
use vapt_intake_core::DispatchError;
use vapt_intake_core::EnvironmentType;
use vapt_intake_core::FlagField;
use vapt_intake_core::NotificationDispatcher;
use vapt_intake_core::ReportFormat;
use vapt_intake_core::Restriction;
use vapt_intake_core::StoredSubmission;
use vapt_intake_core::TestingMode;
use vapt_intake_core::TestingWindow;
use vapt_intake_core::TextField;
use vapt_intake_core::runtime::InMemorySubmissionSink;
use vapt_intake_core::runtime::SubmissionServices;
use vapt_intake_core::runtime::WizardController;
use vapt_intake_notify::format_digest;

/// Dispatcher that renders the digest to stdout instead of delivering it.
struct DigestPreviewDispatcher;

impl NotificationDispatcher for DigestPreviewDispatcher {
    fn send(&self, submission: &StoredSubmission) -> Result<(), DispatchError> {
        write_line("Digest", &format_digest(submission))
            .map_err(|err| DispatchError::DispatchFailed(err.to_string()))
    }
}

/// Fills every field the step validators require.
fn fill_form(wizard: &mut WizardController) {
    let form = wizard.form_mut();
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
    form.set_testing_window(Some(TestingWindow::NonBusinessHours));
    form.toggle_restriction(Restriction::AvoidHeavyScanning, true);
    form.set_flag(FlagField::NotifyBeforeTesting, true);
    form.set_flag(FlagField::VpnAccess, true);
    form.set_flag(FlagField::TestCredentials, true);
    form.set_account_type(Some(AccountType::User));
    form.set_report_format(Some(ReportFormat::TechnicalAndManagement));
    form.set_flag(FlagField::RetestingRequired, false);
    form.set_flag(FlagField::PermissionApproved, true);
    form.set_text(TextField::ApproverName, "Anita Desai");
    form.set_text(TextField::ApproverDesignation, "CTO");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = WizardController::new();
    fill_form(&mut wizard);

    while !wizard.step().is_final() {
        if !wizard.next() {
            if let Some(diagnostic) = wizard.last_diagnostic() {
                write_line("Blocked", &diagnostic.to_string())?;
            }
            return Ok(());
        }
    }
    write_line("Step", &wizard.step().to_string())?;

    let sink = InMemorySubmissionSink::new();
    let services = SubmissionServices::new(&sink, &DigestPreviewDispatcher);
    let stored = wizard.submit(&services)?;
    write_line("Stored", stored.id.as_str())?;
    write_line("Submitted", &stored.submitted_date_time)?;

    Ok(())
}

/// Writes a labeled line to stdout.
fn write_line(label: &str, value: &str) -> Result<(), std::io::Error> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{label}: {value}")
}
