// crates/vapt-intake-core/src/core/submission.rs
// ============================================================================
// Module: VAPT Intake Stored Submissions
// Description: Immutable stored submission records and capture enrichment.
// Purpose: Turn a completed draft into the record a sink persists.
// Dependencies: crate::core::{draft, time}, serde, time
// ============================================================================

//! ## Overview
//! A [`StoredSubmission`] is a completed draft plus capture metadata: an
//! opaque identifier, the capture timestamp in four derivations, and the
//! best-effort origin network address. Records are created exactly once at
//! final submission and never updated. [`enrich`] is pure: sinks call it with
//! their clock reading, a freshly minted identifier, and the origin
//! resolver's answer.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::draft::SubmissionDraft;
use crate::core::time::date_stamp;
use crate::core::time::date_time_stamp;
use crate::core::time::rfc3339_utc;
use crate::core::time::time_stamp;

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Opaque identifier assigned to a stored submission.
///
/// # Invariants
/// - Opaque UTF-8 string; uniqueness is the minting sink's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Creates a new submission identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Best-effort origin network address captured with a submission.
///
/// # Invariants
/// - Holds either a resolver-reported address or the `"Unknown"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OriginAddress(String);

impl OriginAddress {
    /// Sentinel value stored when lookup fails entirely.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Creates an origin address from a resolver-reported value.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates the sentinel address.
    #[must_use]
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true unless this is the sentinel address.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.0 != Self::UNKNOWN
    }
}

impl fmt::Display for OriginAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Stored Submission
// ============================================================================

/// Immutable submission record persisted by a sink.
///
/// # Invariants
/// - Created exactly once at final submission; never updated.
/// - Timestamp derivations agree with `submitted_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSubmission {
    /// Assigned submission identifier.
    pub id: SubmissionId,
    /// Completed draft values.
    #[serde(flatten)]
    pub draft: SubmissionDraft,
    /// Capture timestamp, RFC 3339 UTC.
    pub submitted_at: String,
    /// Capture date (`DD/MM/YYYY`).
    pub submitted_date: String,
    /// Capture time (`HH:MM`).
    pub submitted_time: String,
    /// Combined capture date and time (`DD/MM/YYYY HH:MM`).
    pub submitted_date_time: String,
    /// Origin network address, or the `"Unknown"` sentinel.
    #[serde(rename = "userIPAddress")]
    pub origin_address: OriginAddress,
}

/// Enriches a completed draft into a stored submission record.
///
/// Pure with respect to its inputs: sinks supply the identifier, the capture
/// instant, and the origin address.
#[must_use]
pub fn enrich(
    draft: &SubmissionDraft,
    id: SubmissionId,
    captured_at: OffsetDateTime,
    origin: OriginAddress,
) -> StoredSubmission {
    StoredSubmission {
        id,
        draft: draft.clone(),
        submitted_at: rfc3339_utc(captured_at),
        submitted_date: date_stamp(captured_at),
        submitted_time: time_stamp(captured_at),
        submitted_date_time: date_time_stamp(captured_at),
        origin_address: origin,
    }
}
