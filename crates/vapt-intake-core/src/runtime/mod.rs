// crates/vapt-intake-core/src/runtime/mod.rs
// ============================================================================
// Module: VAPT Intake Runtime
// Description: Wizard controller and in-memory adapters.
// Purpose: Drive step navigation and submission orchestration.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! The runtime layer owns control flow: the wizard controller gates step
//! movement on validation and orchestrates the store-then-notify submission
//! sequence. An in-memory sink backs tests and demos.

pub mod memory;
pub mod wizard;

pub use memory::InMemorySubmissionSink;
pub use wizard::SubmissionServices;
pub use wizard::SubmitError;
pub use wizard::WizardController;
