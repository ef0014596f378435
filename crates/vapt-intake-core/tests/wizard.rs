// crates/vapt-intake-core/tests/wizard.rs
// ============================================================================
// Module: Wizard Controller Tests
// Description: End-to-end tests for navigation gating and submission flow.
// Purpose: Pin exactly-once storage, notification isolation, and retry paths.
// Dependencies: vapt-intake-core
// ============================================================================

//! ## Overview
//! Drives [`WizardController`] through full intake runs with in-process
//! collaborators: the in-memory sink, recording dispatchers, and a counting
//! observer. Covers navigation gating, the terminal submission sequence, and
//! the retryable storage-failure path.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use vapt_intake_core::AccountType;
use vapt_intake_core::AssessmentType;
use vapt_intake_core::DispatchError;
use vapt_intake_core::EnvironmentType;
use vapt_intake_core::Field;
use vapt_intake_core::FlagField;
use vapt_intake_core::NotificationDispatcher;
use vapt_intake_core::ReportFormat;
use vapt_intake_core::StoreError;
use vapt_intake_core::StoredSubmission;
use vapt_intake_core::SubmissionDraft;
use vapt_intake_core::SubmissionId;
use vapt_intake_core::SubmissionSink;
use vapt_intake_core::SubmitObserver;
use vapt_intake_core::TestingMode;
use vapt_intake_core::TextField;
use vapt_intake_core::WizardStep;
use vapt_intake_core::runtime::InMemorySubmissionSink;
use vapt_intake_core::runtime::SubmissionServices;
use vapt_intake_core::runtime::SubmitError;
use vapt_intake_core::runtime::WizardController;

// ============================================================================
// SECTION: Test Doubles
// ============================================================================

/// Dispatcher that records sent submissions and always succeeds.
#[derive(Default)]
struct RecordingDispatcher {
    sent: Mutex<Vec<SubmissionId>>,
}

impl NotificationDispatcher for RecordingDispatcher {
    fn send(&self, submission: &StoredSubmission) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(submission.id.clone());
        Ok(())
    }
}

/// Dispatcher that always fails.
struct FailingDispatcher;

impl NotificationDispatcher for FailingDispatcher {
    fn send(&self, _submission: &StoredSubmission) -> Result<(), DispatchError> {
        Err(DispatchError::DispatchFailed("transport unreachable".to_string()))
    }
}

/// Sink that always fails to persist.
struct FailingSink;

impl SubmissionSink for FailingSink {
    fn store(&self, _draft: &SubmissionDraft) -> Result<StoredSubmission, StoreError> {
        Err(StoreError::Io("disk full".to_string()))
    }

    fn list_submissions(&self) -> Result<Vec<StoredSubmission>, StoreError> {
        Ok(Vec::new())
    }
}

/// Observer that counts terminal events.
#[derive(Default)]
struct CountingObserver {
    stored: AtomicUsize,
    sent: AtomicUsize,
    failed: AtomicUsize,
}

impl SubmitObserver for CountingObserver {
    fn on_stored(&self, _submission: &StoredSubmission) {
        self.stored.fetch_add(1, Ordering::Relaxed);
    }

    fn on_notify_sent(&self, _id: &SubmissionId) {
        self.sent.fetch_add(1, Ordering::Relaxed);
    }

    fn on_notify_failed(&self, _id: &SubmissionId, _error: &DispatchError) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Builds a wizard at the final step with a fully valid draft.
fn wizard_at_final_step() -> WizardController {
    let mut wizard = WizardController::new();
    let form = wizard.form_mut();
    form.set_text(TextField::OrganizationName, "Acme Corporation");
    form.set_text(TextField::PrimaryContactName, "Priya Sharma");
    form.set_text(TextField::Designation, "Security Lead");
    form.set_text(TextField::Email, "priya@acme.example");
    form.set_text(TextField::MobileNumber, "9876543210");
    form.set_assessment_type(Some(AssessmentType::Both));
    form.set_testing_mode(Some(TestingMode::Remote));
    form.set_text(TextField::IpRange, "10.0.0.0/24");
    form.set_text(TextField::DeviceCount, "0150");
    form.set_environment_type(Some(EnvironmentType::Cloud));
    form.set_flag(FlagField::TestCredentials, true);
    form.set_account_type(Some(AccountType::User));
    form.set_report_format(Some(ReportFormat::TechnicalAndManagement));
    form.set_flag(FlagField::RetestingRequired, true);
    for _ in 1..7 {
        assert!(wizard.next());
    }
    assert!(wizard.step().is_final());
    wizard
}

// ============================================================================
// SECTION: Navigation
// ============================================================================

#[test]
fn next_is_blocked_until_the_step_validates() {
    let mut wizard = WizardController::new();
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::FIRST);
    assert!(wizard.form().errors().is_flagged(Field::OrganizationName));
    assert_eq!(wizard.last_diagnostic().unwrap().title, "Missing Information");

    let form = wizard.form_mut();
    form.set_text(TextField::OrganizationName, "Acme Corporation");
    form.set_text(TextField::PrimaryContactName, "Priya Sharma");
    form.set_text(TextField::Designation, "Security Lead");
    form.set_text(TextField::Email, "priya@acme.example");
    form.set_text(TextField::MobileNumber, "9876543210");
    assert!(wizard.next());
    assert_eq!(wizard.step().get(), 2);
    assert!(wizard.form().errors().is_empty());
    assert!(wizard.last_diagnostic().is_none());
}

#[test]
fn previous_retreats_without_validation_and_floors_at_step_one() {
    let mut wizard = WizardController::new();
    wizard.previous();
    assert_eq!(wizard.step(), WizardStep::FIRST);

    let mut wizard = wizard_at_final_step();
    wizard.previous();
    assert_eq!(wizard.step().get(), 6);
}

#[test]
fn previous_then_next_returns_to_the_same_step() {
    let mut wizard = wizard_at_final_step();
    wizard.previous();
    wizard.previous();
    assert_eq!(wizard.step().get(), 5);
    assert!(wizard.next());
    assert!(wizard.next());
    assert!(wizard.step().is_final());
}

// ============================================================================
// SECTION: Submission Flow
// ============================================================================

#[test]
fn submit_stores_exactly_once_then_notifies() {
    let mut wizard = wizard_at_final_step();
    let sink = InMemorySubmissionSink::new();
    let dispatcher = RecordingDispatcher::default();
    let observer = CountingObserver::default();
    let services = SubmissionServices::new(&sink, &dispatcher).with_observer(&observer);

    let stored = wizard.submit(&services).unwrap();
    assert!(wizard.is_confirmed());
    assert!(!wizard.is_submitting());
    assert_eq!(stored.draft.organization_name, "Acme Corporation");

    let records = sink.list_submissions().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, stored.id);
    assert_eq!(dispatcher.sent.lock().unwrap().as_slice(), &[stored.id]);
    assert_eq!(observer.stored.load(Ordering::Relaxed), 1);
    assert_eq!(observer.sent.load(Ordering::Relaxed), 1);
    assert_eq!(observer.failed.load(Ordering::Relaxed), 0);
}

#[test]
fn submit_confirms_even_when_notification_fails() {
    let mut wizard = wizard_at_final_step();
    let sink = InMemorySubmissionSink::new();
    let observer = CountingObserver::default();
    let services = SubmissionServices::new(&sink, &FailingDispatcher).with_observer(&observer);

    let stored = wizard.submit(&services).unwrap();
    assert!(wizard.is_confirmed());
    assert_eq!(sink.list_submissions().unwrap().len(), 1);
    assert_eq!(sink.list_submissions().unwrap()[0].id, stored.id);
    assert_eq!(observer.stored.load(Ordering::Relaxed), 1);
    assert_eq!(observer.sent.load(Ordering::Relaxed), 0);
    assert_eq!(observer.failed.load(Ordering::Relaxed), 1);
}

#[test]
fn submit_is_rejected_before_the_final_step() {
    let mut wizard = WizardController::new();
    let sink = InMemorySubmissionSink::new();
    let dispatcher = RecordingDispatcher::default();
    let services = SubmissionServices::new(&sink, &dispatcher);

    let error = wizard.submit(&services).unwrap_err();
    assert!(matches!(error, SubmitError::NotAtFinalStep(step) if step == WizardStep::FIRST));
    assert!(sink.list_submissions().unwrap().is_empty());
}

#[test]
fn submit_revalidates_and_rejects_an_invalidated_draft() {
    let mut wizard = wizard_at_final_step();
    wizard.form_mut().set_text(TextField::Email, "no-longer-valid");
    let sink = InMemorySubmissionSink::new();
    let dispatcher = RecordingDispatcher::default();
    let services = SubmissionServices::new(&sink, &dispatcher);

    let error = wizard.submit(&services).unwrap_err();
    match error {
        SubmitError::Validation(diagnostic) => {
            assert_eq!(diagnostic.title, "Invalid Email");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(wizard.form().errors().is_flagged(Field::Email));
    assert!(!wizard.is_confirmed());
    assert!(sink.list_submissions().unwrap().is_empty());
}

#[test]
fn storage_failure_is_retryable() {
    let mut wizard = wizard_at_final_step();
    let dispatcher = RecordingDispatcher::default();
    let observer = CountingObserver::default();

    let failing = SubmissionServices::new(&FailingSink, &dispatcher).with_observer(&observer);
    let error = wizard.submit(&failing).unwrap_err();
    assert!(matches!(error, SubmitError::Storage(StoreError::Io(_))));
    assert!(!wizard.is_submitting());
    assert!(!wizard.is_confirmed());
    assert!(dispatcher.sent.lock().unwrap().is_empty());
    assert_eq!(observer.stored.load(Ordering::Relaxed), 0);

    let sink = InMemorySubmissionSink::new();
    let services = SubmissionServices::new(&sink, &dispatcher).with_observer(&observer);
    wizard.submit(&services).unwrap();
    assert!(wizard.is_confirmed());
    assert_eq!(sink.list_submissions().unwrap().len(), 1);
}

#[test]
fn a_confirmed_wizard_rejects_further_submissions() {
    let mut wizard = wizard_at_final_step();
    let sink = InMemorySubmissionSink::new();
    let dispatcher = RecordingDispatcher::default();
    let services = SubmissionServices::new(&sink, &dispatcher);

    wizard.submit(&services).unwrap();
    let error = wizard.submit(&services).unwrap_err();
    assert!(matches!(error, SubmitError::AlreadyConfirmed));
    assert_eq!(sink.list_submissions().unwrap().len(), 1);
}

// ============================================================================
// SECTION: Record Enrichment
// ============================================================================

#[test]
fn in_memory_sink_mints_sequential_identifiers_and_unknown_origin() {
    let sink = InMemorySubmissionSink::new();
    let draft = SubmissionDraft::default();
    let first = sink.store(&draft).unwrap();
    let second = sink.store(&draft).unwrap();
    assert_eq!(first.id.as_str(), "submission-1");
    assert_eq!(second.id.as_str(), "submission-2");
    assert_eq!(first.origin_address.as_str(), "Unknown");
    assert!(!first.origin_address.is_known());
    assert_eq!(sink.list_submissions().unwrap().len(), 2);

    sink.clear().unwrap();
    assert!(sink.list_submissions().unwrap().is_empty());
    let third = sink.store(&draft).unwrap();
    assert_eq!(third.id.as_str(), "submission-3");
}
