// crates/vapt-intake-notify/src/email.rs
// ============================================================================
// Module: EmailJS Notification Dispatcher
// Description: Blocking EmailJS REST transport for submission notifications.
// Purpose: Deliver the assessment digest with strict outbound limits.
// Dependencies: vapt-intake-core, reqwest, serde, serde_json, url
// ============================================================================

//! ## Overview
//! [`EmailJsDispatcher`] delivers one notification per stored submission
//! through the EmailJS send endpoint. A single POST is issued per dispatch:
//! no retries, redirects disabled, hard request timeout. Any non-success
//! status fails the dispatch; the caller decides whether that failure matters.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use serde::Serialize;
use url::Url;
use vapt_intake_core::DispatchError;
use vapt_intake_core::NotificationDispatcher;
use vapt_intake_core::StoredSubmission;

use crate::digest::format_contact_name;
use crate::digest::format_digest;
use crate::digest::format_email_time;
use crate::digest::format_title;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default EmailJS send endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Configuration for the EmailJS dispatcher.
///
/// # Invariants
/// - All three credentials must be non-empty.
/// - `timeout_ms` applies to the full request lifecycle.
#[derive(Debug, Clone)]
pub struct EmailDispatchConfig {
    /// EmailJS service identifier.
    pub service_id: String,
    /// EmailJS template identifier.
    pub template_id: String,
    /// EmailJS public API key.
    pub public_key: String,
    /// Send endpoint; overridable for tests.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl EmailDispatchConfig {
    /// Creates a config for the production endpoint with default limits.
    #[must_use]
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 10_000,
            user_agent: "vapt-intake/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Wire Types
// ============================================================================

/// Template parameters carried in the send request.
#[derive(Debug, Serialize)]
struct TemplateParams {
    /// Subject line.
    title: String,
    /// Contact name.
    name: String,
    /// Submission time as `HH.MM`.
    time: String,
    /// Plain-text assessment digest.
    message: String,
    /// Reply-to address.
    email: String,
}

/// EmailJS send request body.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    /// Service identifier.
    service_id: &'a str,
    /// Template identifier.
    template_id: &'a str,
    /// Public API key.
    user_id: &'a str,
    /// Template parameters.
    template_params: TemplateParams,
}

// ============================================================================
// SECTION: Dispatcher Implementation
// ============================================================================

/// Notification dispatcher backed by the EmailJS REST endpoint.
///
/// # Invariants
/// - Exactly one POST per dispatch; no retries.
/// - Redirects are not followed.
#[derive(Debug)]
pub struct EmailJsDispatcher {
    /// Dispatcher configuration.
    config: EmailDispatchConfig,
    /// Parsed send endpoint.
    endpoint: Url,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl EmailJsDispatcher {
    /// Creates a dispatcher with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotConfigured`] when credentials are missing,
    /// the endpoint does not parse, or the HTTP client cannot be created.
    pub fn new(config: EmailDispatchConfig) -> Result<Self, DispatchError> {
        if config.service_id.is_empty()
            || config.template_id.is_empty()
            || config.public_key.is_empty()
        {
            return Err(DispatchError::NotConfigured(
                "email credentials are incomplete".to_string(),
            ));
        }
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|_| DispatchError::NotConfigured("email endpoint is invalid".to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .map_err(|_| DispatchError::NotConfigured("http client build failed".to_string()))?;
        Ok(Self {
            config,
            endpoint,
            client,
        })
    }
}

impl NotificationDispatcher for EmailJsDispatcher {
    fn send(&self, submission: &StoredSubmission) -> Result<(), DispatchError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                title: format_title(&submission.draft),
                name: format_contact_name(&submission.draft),
                time: format_email_time(submission),
                message: format_digest(submission),
                email: if submission.draft.email.is_empty() {
                    "N/A".to_string()
                } else {
                    submission.draft.email.clone()
                },
            },
        };
        let payload = serde_json::to_vec(&body)
            .map_err(|err| DispatchError::DispatchFailed(err.to_string()))?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(|err| DispatchError::DispatchFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::DispatchFailed(format!(
                "email endpoint returned status {status}"
            )));
        }
        Ok(())
    }
}
