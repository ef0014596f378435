// crates/vapt-intake-core/src/core/time.rs
// ============================================================================
// Module: VAPT Intake Capture Time
// Description: Deterministic capture-time formatting for stored submissions.
// Purpose: Derive the human-readable timestamp forms stored with a record.
// Dependencies: time
// ============================================================================

//! ## Overview
//! The wizard core never reads the wall clock; hosts supply capture times
//! through the [`crate::interfaces::CaptureClock`] boundary. This module
//! turns a supplied instant into the fixed formats stored on a submission:
//! RFC 3339 UTC plus `DD/MM/YYYY`, `HH:MM`, and their concatenation. All
//! formatting is infallible and locale-independent so stored records are
//! deterministic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::OffsetDateTime;
use time::UtcOffset;

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats an instant as RFC 3339 UTC with second precision.
#[must_use]
pub fn rfc3339_utc(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}

/// Formats the date-only derivation (`DD/MM/YYYY`, UTC).
#[must_use]
pub fn date_stamp(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    format!("{:02}/{:02}/{:04}", utc.day(), u8::from(utc.month()), utc.year())
}

/// Formats the time-only derivation (`HH:MM`, 24-hour, UTC).
#[must_use]
pub fn time_stamp(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    format!("{:02}:{:02}", utc.hour(), utc.minute())
}

/// Formats the combined derivation (`DD/MM/YYYY HH:MM`, UTC).
#[must_use]
pub fn date_time_stamp(instant: OffsetDateTime) -> String {
    format!("{} {}", date_stamp(instant), time_stamp(instant))
}
