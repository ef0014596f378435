// crates/vapt-intake-core/src/interfaces/mod.rs
// ============================================================================
// Module: VAPT Intake Interfaces
// Description: Backend-agnostic interfaces for storage, notification, and time.
// Purpose: Define the collaborator surfaces consumed by the wizard runtime.
// Dependencies: crate::core, thiserror, time
// ============================================================================

//! ## Overview
//! Interfaces define how the wizard integrates with external systems without
//! embedding backend details. Storage is authoritative and fails closed;
//! notification is best-effort and at-most-once; origin lookup is total and
//! degrades to a sentinel. Hosts plug concrete implementations in at
//! construction time, which keeps the core deterministic and testable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::draft::SubmissionDraft;
use crate::core::submission::OriginAddress;
use crate::core::submission::StoredSubmission;
use crate::core::submission::SubmissionId;

// ============================================================================
// SECTION: Submission Sink
// ============================================================================

/// Submission sink errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Sink I/O error.
    #[error("submission store io error: {0}")]
    Io(String),
    /// Sink data is corrupted or fails integrity checks.
    #[error("submission store corruption: {0}")]
    Corrupt(String),
    /// Sink data is invalid.
    #[error("submission store invalid data: {0}")]
    Invalid(String),
    /// Sink reported an error.
    #[error("submission store error: {0}")]
    Store(String),
}

/// Durable append-only store of completed submissions.
///
/// Sinks own enrichment: they mint the identifier, read their clock, resolve
/// the origin address, and call [`crate::enrich`] before persisting.
pub trait SubmissionSink {
    /// Stores a completed draft and returns the enriched record.
    ///
    /// All-or-nothing for a given attempt: on error no partial record may be
    /// left behind.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the persistence medium is unavailable.
    fn store(&self, draft: &SubmissionDraft) -> Result<StoredSubmission, StoreError>;

    /// Returns every stored submission in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when reading fails.
    fn list_submissions(&self) -> Result<Vec<StoredSubmission>, StoreError>;
}

// ============================================================================
// SECTION: Notification Dispatcher
// ============================================================================

/// Notification dispatch errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Transport configuration is missing or unusable.
    #[error("notification transport not configured: {0}")]
    NotConfigured(String),
    /// Dispatch attempt failed.
    #[error("notification dispatch failed: {0}")]
    DispatchFailed(String),
}

/// Outbound notification transport for stored submissions.
///
/// Implementations format the digest and deliver it at most once; the caller
/// never retries and never rolls back storage on failure.
pub trait NotificationDispatcher {
    /// Sends the digest for a stored submission.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when delivery fails.
    fn send(&self, submission: &StoredSubmission) -> Result<(), DispatchError>;
}

// ============================================================================
// SECTION: Origin Resolver
// ============================================================================

/// Best-effort resolver for the submitter's origin network address.
///
/// Resolution failure is not an error: implementations degrade to
/// [`OriginAddress::unknown`] rather than blocking submission.
pub trait OriginResolver {
    /// Resolves the origin address, or returns the sentinel.
    fn resolve(&self) -> OriginAddress;
}

// ============================================================================
// SECTION: Capture Clock
// ============================================================================

/// Clock supplying capture instants to sinks.
///
/// The core never reads the wall clock directly; tests inject fixed clocks.
pub trait CaptureClock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock implementation of [`CaptureClock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl CaptureClock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

// ============================================================================
// SECTION: Submit Observer
// ============================================================================

/// Observability hook for terminal submission events.
///
/// Deliberately dependency-light so hosts can plug in their logger without a
/// hard logging dependency in the core. All methods default to no-ops.
pub trait SubmitObserver {
    /// Called after the sink persisted a record.
    fn on_stored(&self, _submission: &StoredSubmission) {}

    /// Called after the notification digest was delivered.
    fn on_notify_sent(&self, _id: &SubmissionId) {}

    /// Called when notification delivery failed; the failure is isolated and
    /// surfaced nowhere else.
    fn on_notify_failed(&self, _id: &SubmissionId, _error: &DispatchError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SubmitObserver for NoopObserver {}
