// crates/vapt-intake-core/src/lib.rs
// ============================================================================
// Module: VAPT Intake Core
// Description: Wizard core for VAPT intake: state, validation, submission.
// Purpose: Provide the backend-agnostic intake wizard and its interfaces.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! This crate implements the multi-step VAPT intake wizard: the form state and
//! its normalizing mutations, the per-step validator, the wizard controller,
//! and the enrichment that turns a completed draft into a stored submission.
//! Persistence and notification are backend-agnostic interfaces; hosts supply
//! concrete sinks, dispatchers, clocks, and origin resolvers.
//!
//! The core is deterministic: it never reads the wall clock or the network.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use crate::core::draft::FieldErrors;
pub use crate::core::draft::FormState;
pub use crate::core::draft::SubmissionDraft;
pub use crate::core::fields::AccountType;
pub use crate::core::fields::AssessmentType;
pub use crate::core::fields::EnvironmentType;
pub use crate::core::fields::Field;
pub use crate::core::fields::FlagField;
pub use crate::core::fields::ReportFormat;
pub use crate::core::fields::Restriction;
pub use crate::core::fields::TestingMode;
pub use crate::core::fields::TestingWindow;
pub use crate::core::fields::TextField;
pub use crate::core::steps::Diagnostic;
pub use crate::core::steps::StepReport;
pub use crate::core::steps::TOTAL_STEPS;
pub use crate::core::steps::WizardStep;
pub use crate::core::steps::validate_step;
pub use crate::core::steps::validate_submission;
pub use crate::core::submission::OriginAddress;
pub use crate::core::submission::StoredSubmission;
pub use crate::core::submission::SubmissionId;
pub use crate::core::submission::enrich;
pub use crate::core::validators::is_alphabetic_name;
pub use crate::core::validators::is_valid_device_count;
pub use crate::core::validators::is_valid_email;
pub use crate::core::validators::is_valid_ip_token;
pub use crate::core::validators::is_valid_mobile;
pub use crate::interfaces::CaptureClock;
pub use crate::interfaces::DispatchError;
pub use crate::interfaces::NoopObserver;
pub use crate::interfaces::NotificationDispatcher;
pub use crate::interfaces::OriginResolver;
pub use crate::interfaces::StoreError;
pub use crate::interfaces::SubmissionSink;
pub use crate::interfaces::SubmitObserver;
pub use crate::interfaces::SystemClock;
