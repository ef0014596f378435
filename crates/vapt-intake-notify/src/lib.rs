// crates/vapt-intake-notify/src/lib.rs
// ============================================================================
// Module: VAPT Intake Notify Library
// Description: Notification digest rendering, EmailJS transport, origin lookup.
// Purpose: Outbound collaborators behind the core dispatcher and resolver traits.
// Dependencies: vapt-intake-core, reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! `vapt-intake-notify` renders stored submissions into the plain-text
//! assessment digest and delivers it through the EmailJS REST endpoint. It
//! also provides the HTTP origin resolver used to stamp records with the
//! submitter's public address. Both collaborators are strictly bounded:
//! redirects disabled, hard timeouts, capped response reads, and no retries
//! beyond the resolver's single fallback endpoint.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod digest;
pub mod email;
pub mod origin;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use digest::format_contact_name;
pub use digest::format_digest;
pub use digest::format_email_time;
pub use digest::format_title;
pub use email::EmailDispatchConfig;
pub use email::EmailJsDispatcher;
pub use origin::HttpOriginResolver;
pub use origin::OriginLookupConfig;
