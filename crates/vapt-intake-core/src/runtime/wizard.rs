// crates/vapt-intake-core/src/runtime/wizard.rs
// ============================================================================
// Module: VAPT Intake Wizard Controller
// Description: Step state machine and terminal submission orchestration.
// Purpose: Gate navigation on validation and drive store-then-notify.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! [`WizardController`] owns the step position (1..=7) and the submission
//! flags. `next` advances only when the current step validates; `previous`
//! retreats unconditionally. `submit` re-validates the union of the step 1-3
//! rule sets, persists through the sink, then notifies at most once.
//! Notification failure is isolated: the stored record stands and the wizard
//! still confirms. Storage failure resets `submitting` and leaves the wizard
//! retryable at the final step.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::draft::FormState;
use crate::core::steps::Diagnostic;
use crate::core::steps::WizardStep;
use crate::core::steps::validate_step;
use crate::core::steps::validate_submission;
use crate::core::submission::StoredSubmission;
use crate::interfaces::NoopObserver;
use crate::interfaces::NotificationDispatcher;
use crate::interfaces::StoreError;
use crate::interfaces::SubmissionSink;
use crate::interfaces::SubmitObserver;

// ============================================================================
// SECTION: Submission Services
// ============================================================================

/// No-op observer used when the host does not supply one.
static NOOP_OBSERVER: NoopObserver = NoopObserver;

/// Collaborators required to complete a submission.
///
/// # Invariants
/// - The sink is authoritative; the dispatcher is best-effort.
pub struct SubmissionServices<'a> {
    /// Durable submission sink.
    sink: &'a dyn SubmissionSink,
    /// Outbound notification transport.
    dispatcher: &'a dyn NotificationDispatcher,
    /// Observability hook for terminal events.
    observer: &'a dyn SubmitObserver,
}

impl<'a> SubmissionServices<'a> {
    /// Creates services with a no-op observer.
    #[must_use]
    pub fn new(sink: &'a dyn SubmissionSink, dispatcher: &'a dyn NotificationDispatcher) -> Self {
        Self {
            sink,
            dispatcher,
            observer: &NOOP_OBSERVER,
        }
    }

    /// Replaces the observer.
    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn SubmitObserver) -> Self {
        self.observer = observer;
        self
    }
}

// ============================================================================
// SECTION: Submit Errors
// ============================================================================

/// Errors surfaced by [`WizardController::submit`].
///
/// # Invariants
/// - `Storage` is the only retryable variant; the wizard state remains at the
///   final step with `submitting` reset.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Submission requested before the final step.
    #[error("submission is only accepted at step {final_step}; wizard is at step {0}", final_step = crate::core::steps::TOTAL_STEPS)]
    NotAtFinalStep(WizardStep),
    /// A submission attempt is already in flight.
    #[error("a submission attempt is already in progress")]
    AlreadySubmitting,
    /// The wizard already confirmed a submission.
    #[error("this submission has already been confirmed")]
    AlreadyConfirmed,
    /// The completed draft failed final validation.
    #[error("validation failed: {0}")]
    Validation(Diagnostic),
    /// The sink failed to persist the record.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

// ============================================================================
// SECTION: Wizard Controller
// ============================================================================

/// Multi-step intake wizard state machine.
///
/// # Invariants
/// - `step` stays within 1..=7.
/// - `confirmed = true` is terminal; no further mutation is accepted.
/// - The step pointer never advances past a failed validation.
#[derive(Debug, Default)]
pub struct WizardController {
    /// Current step position.
    step: WizardStep,
    /// True while a submission attempt is in flight.
    submitting: bool,
    /// True once a submission has been stored and confirmed.
    confirmed: bool,
    /// Form state owned by this wizard instance.
    form: FormState,
    /// Diagnostic from the latest failed validation, if any.
    last_diagnostic: Option<Diagnostic>,
}

impl WizardController {
    /// Creates a wizard at step 1 with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current step.
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns true while a submission attempt is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns true once a submission has been confirmed.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Returns the form state.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the form state for editing.
    pub const fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Returns the diagnostic from the latest failed validation.
    #[must_use]
    pub const fn last_diagnostic(&self) -> Option<&Diagnostic> {
        self.last_diagnostic.as_ref()
    }

    /// Validates the current step and advances on success.
    ///
    /// Returns true when the step pointer moved. On failure the step is
    /// unchanged and the error set and diagnostic are surfaced on the form.
    pub fn next(&mut self) -> bool {
        let report = validate_step(self.step, self.form.draft());
        if report.is_ok() {
            self.form.replace_errors(report.errors);
            self.last_diagnostic = None;
            self.step = self.step.advanced();
            true
        } else {
            self.last_diagnostic = report.diagnostic.clone();
            self.form.replace_errors(report.errors);
            false
        }
    }

    /// Retreats one step, saturating at step 1. Never validates.
    pub fn previous(&mut self) {
        self.step = self.step.retreated();
    }

    /// Runs the terminal submission sequence.
    ///
    /// Re-validates the union of the step 1-3 rule sets, stores the draft
    /// through the sink, then notifies at most once. The wizard confirms as
    /// soon as storage succeeds, regardless of notification outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] when the wizard is not at the final step, a
    /// submission is already in flight or confirmed, final validation fails,
    /// or the sink fails to persist (retryable).
    pub fn submit(
        &mut self,
        services: &SubmissionServices<'_>,
    ) -> Result<StoredSubmission, SubmitError> {
        if self.confirmed {
            return Err(SubmitError::AlreadyConfirmed);
        }
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if !self.step.is_final() {
            return Err(SubmitError::NotAtFinalStep(self.step));
        }
        let report = validate_submission(self.form.draft());
        if let Some(diagnostic) = report.diagnostic {
            self.form.replace_errors(report.errors);
            self.last_diagnostic = Some(diagnostic.clone());
            return Err(SubmitError::Validation(diagnostic));
        }
        self.form.replace_errors(report.errors);
        self.last_diagnostic = None;

        self.submitting = true;
        let stored = match services.sink.store(self.form.draft()) {
            Ok(stored) => stored,
            Err(error) => {
                self.submitting = false;
                return Err(SubmitError::Storage(error));
            }
        };
        services.observer.on_stored(&stored);
        match services.dispatcher.send(&stored) {
            Ok(()) => services.observer.on_notify_sent(&stored.id),
            Err(error) => services.observer.on_notify_failed(&stored.id, &error),
        }
        self.submitting = false;
        self.confirmed = true;
        Ok(stored)
    }
}
