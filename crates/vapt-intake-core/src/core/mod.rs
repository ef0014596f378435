// crates/vapt-intake-core/src/core/mod.rs
// ============================================================================
// Module: VAPT Intake Core Model
// Description: Field enums, validators, form state, steps, and submissions.
// Purpose: Group the pure data model and validation logic of the wizard.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The `core` module holds everything that is pure and deterministic: field
//! identifiers and selection enums, the shape validators, the normalizing form
//! state, the step validator, and the submission enrichment function.

pub mod draft;
pub mod fields;
pub mod steps;
pub mod submission;
pub mod time;
pub mod validators;
