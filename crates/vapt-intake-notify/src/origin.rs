// crates/vapt-intake-notify/src/origin.rs
// ============================================================================
// Module: HTTP Origin Resolver
// Description: Public-address lookup with a single fallback endpoint.
// Purpose: Stamp stored submissions with the submitter's public address.
// Dependencies: vapt-intake-core, reqwest, url
// ============================================================================

//! ## Overview
//! [`HttpOriginResolver`] asks a public echo endpoint for the caller's
//! address. Exactly two attempts are made: the primary endpoint, then the
//! fallback. Responses are read under a hard byte cap and checked for address
//! plausibility. Lookup never fails the caller: any total failure yields the
//! `Unknown` sentinel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use url::Url;
use vapt_intake_core::OriginAddress;
use vapt_intake_core::OriginResolver;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default primary lookup endpoint.
const DEFAULT_PRIMARY_ENDPOINT: &str = "https://api.ipify.org";
/// Default fallback lookup endpoint.
const DEFAULT_FALLBACK_ENDPOINT: &str = "https://api64.ipify.org";
/// Hard cap on lookup response bodies in bytes.
const MAX_RESPONSE_BYTES: u64 = 256;
/// Longest plausible address text (IPv6 with zone).
const MAX_ADDRESS_LENGTH: usize = 64;

/// Configuration for the HTTP origin resolver.
///
/// # Invariants
/// - At most two endpoints are contacted per lookup, in order.
/// - `timeout_ms` applies independently to each attempt.
#[derive(Debug, Clone)]
pub struct OriginLookupConfig {
    /// Primary lookup endpoint.
    pub primary_endpoint: String,
    /// Fallback lookup endpoint, tried once when the primary fails.
    pub fallback_endpoint: String,
    /// Request timeout in milliseconds per attempt.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for OriginLookupConfig {
    fn default() -> Self {
        Self {
            primary_endpoint: DEFAULT_PRIMARY_ENDPOINT.to_string(),
            fallback_endpoint: DEFAULT_FALLBACK_ENDPOINT.to_string(),
            timeout_ms: 5_000,
            user_agent: "vapt-intake/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Resolver Implementation
// ============================================================================

/// Origin resolver backed by public address echo endpoints.
pub struct HttpOriginResolver {
    /// Resolver configuration.
    config: OriginLookupConfig,
    /// HTTP client used for outbound requests.
    client: Option<Client>,
}

impl HttpOriginResolver {
    /// Creates a resolver with the given configuration.
    ///
    /// Client construction failure is absorbed: such a resolver answers with
    /// the `Unknown` sentinel instead of erroring per lookup.
    #[must_use]
    pub fn new(config: OriginLookupConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()
            .ok();
        Self {
            config,
            client,
        }
    }

    /// Attempts one endpoint and returns a plausible address, if any.
    fn attempt(&self, endpoint: &str) -> Option<OriginAddress> {
        let client = self.client.as_ref()?;
        let url = Url::parse(endpoint).ok()?;
        let response = client.get(url).send().ok()?;
        if !response.status().is_success() {
            return None;
        }
        let mut buf = Vec::new();
        let mut handle = response.take(MAX_RESPONSE_BYTES);
        handle.read_to_end(&mut buf).ok()?;
        let body = std::str::from_utf8(&buf).ok()?;
        let address = body.trim();
        if is_plausible_address(address) {
            Some(OriginAddress::new(address))
        } else {
            None
        }
    }
}

impl Default for HttpOriginResolver {
    fn default() -> Self {
        Self::new(OriginLookupConfig::default())
    }
}

impl OriginResolver for HttpOriginResolver {
    fn resolve(&self) -> OriginAddress {
        self.attempt(&self.config.primary_endpoint)
            .or_else(|| self.attempt(&self.config.fallback_endpoint))
            .unwrap_or_else(OriginAddress::unknown)
    }
}

// ============================================================================
// SECTION: Address Plausibility
// ============================================================================

/// Checks that the response text is shaped like an IPv4 or IPv6 address.
fn is_plausible_address(text: &str) -> bool {
    !text.is_empty()
        && text.len() <= MAX_ADDRESS_LENGTH
        && text.chars().all(|ch| ch.is_ascii_hexdigit() || ch == '.' || ch == ':')
}
