// crates/vapt-intake-store-sqlite/src/lib.rs
// ============================================================================
// Module: VAPT Intake SQLite Store Library
// Description: Durable submission sink backed by SQLite.
// Purpose: Persist stored submissions across host restarts.
// Dependencies: vapt-intake-core, rusqlite, serde_json
// ============================================================================

//! ## Overview
//! `vapt-intake-store-sqlite` implements the core [`SubmissionSink`] trait on
//! top of `SQLite` with WAL journaling. Records are stored as JSON rows in an
//! append-only table and listed back in arrival order. Reads fail closed on
//! corrupt rows.
//!
//! [`SubmissionSink`]: vapt_intake_core::SubmissionSink

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteSubmissionStore;
