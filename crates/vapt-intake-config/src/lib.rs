// crates/vapt-intake-config/src/lib.rs
// ============================================================================
// Module: VAPT Intake Config Library
// Description: Canonical config model and fail-closed validation.
// Purpose: Single source of truth for vapt-intake.toml semantics.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! `vapt-intake-config` defines the configuration model for intake hosts:
//! notification transport credentials, origin lookup endpoints, and the
//! submission store location. Loading is strict and fail-closed: oversized
//! files, non-UTF-8 content, over-long paths, and semantically invalid
//! sections are all rejected before any collaborator is constructed.
//!
//! Notification credentials may be supplied or overridden through the
//! `VAPT_EMAILJS_SERVICE_ID`, `VAPT_EMAILJS_TEMPLATE_ID`, and
//! `VAPT_EMAILJS_PUBLIC_KEY` environment variables, which take precedence
//! over file values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "vapt-intake.toml";
/// Environment variable used to override the config path.
const CONFIG_ENV_VAR: &str = "VAPT_INTAKE_CONFIG";
/// Environment override for the notification service identifier.
const ENV_SERVICE_ID: &str = "VAPT_EMAILJS_SERVICE_ID";
/// Environment override for the notification template identifier.
const ENV_TEMPLATE_ID: &str = "VAPT_EMAILJS_TEMPLATE_ID";
/// Environment override for the notification public key.
const ENV_PUBLIC_KEY: &str = "VAPT_EMAILJS_PUBLIC_KEY";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a notification credential value.
const MAX_CREDENTIAL_LENGTH: usize = 256;
/// Minimum outbound request timeout in milliseconds.
const MIN_REQUEST_TIMEOUT_MS: u64 = 100;
/// Maximum outbound request timeout in milliseconds.
const MAX_REQUEST_TIMEOUT_MS: u64 = 60_000;
/// Default outbound request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Default busy timeout for the sqlite store in milliseconds.
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Default submission store filename.
const DEFAULT_STORE_PATH: &str = "vapt-submissions.db";
/// Default primary origin lookup endpoint.
const DEFAULT_PRIMARY_ENDPOINT: &str = "https://api.ipify.org";
/// Default fallback origin lookup endpoint.
const DEFAULT_FALLBACK_ENDPOINT: &str = "https://api64.ipify.org";
/// Maximum length of an origin lookup endpoint.
const MAX_ENDPOINT_LENGTH: usize = 2048;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// VAPT intake host configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    /// Notification transport configuration.
    #[serde(default)]
    pub notify: NotifyConfig,
    /// Origin lookup configuration.
    #[serde(default)]
    pub origin: OriginConfig,
    /// Submission store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

/// Notification transport (EmailJS) configuration.
///
/// All three credentials must be present, from file or environment, for the
/// dispatcher to be constructed; a partially configured section is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Service identifier.
    #[serde(default)]
    pub service_id: String,
    /// Template identifier.
    #[serde(default)]
    pub template_id: String,
    /// Public API key.
    #[serde(default)]
    pub public_key: String,
    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub timeout_ms: u64,
}

/// Origin lookup configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginConfig {
    /// Whether origin lookup is attempted at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Primary lookup endpoint.
    #[serde(default = "default_primary_endpoint")]
    pub primary_endpoint: String,
    /// Fallback lookup endpoint, tried once when the primary fails.
    #[serde(default = "default_fallback_endpoint")]
    pub fallback_endpoint: String,
    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub timeout_ms: u64,
}

/// Submission store configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the sqlite database file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    /// Busy timeout in milliseconds for concurrent access.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// Serde default for enabled flags.
fn default_true() -> bool {
    true
}

/// Serde default for outbound request timeouts.
fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

/// Serde default for the sqlite busy timeout.
fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

/// Serde default for the submission store path.
fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Serde default for the primary origin lookup endpoint.
fn default_primary_endpoint() -> String {
    DEFAULT_PRIMARY_ENDPOINT.to_string()
}

/// Serde default for the fallback origin lookup endpoint.
fn default_fallback_endpoint() -> String {
    DEFAULT_FALLBACK_ENDPOINT.to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_endpoint: default_primary_endpoint(),
            fallback_endpoint: default_fallback_endpoint(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

impl IntakeConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// The explicit `path` wins; otherwise the `VAPT_INTAKE_CONFIG`
    /// environment variable is consulted, then `vapt-intake.toml` in the
    /// working directory. Notification credential environment overrides are
    /// applied before validation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let mut config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies notification credential environment overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var(ENV_SERVICE_ID) {
            self.notify.service_id = value;
        }
        if let Ok(value) = env::var(ENV_TEMPLATE_ID) {
            self.notify.template_id = value;
        }
        if let Ok(value) = env::var(ENV_PUBLIC_KEY) {
            self.notify.public_key = value;
        }
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.notify.validate()?;
        self.origin.validate()?;
        self.store.validate()?;
        Ok(())
    }

    /// Returns true when all notification credentials are present.
    #[must_use]
    pub fn notify_configured(&self) -> bool {
        !self.notify.service_id.is_empty()
            && !self.notify.template_id.is_empty()
            && !self.notify.public_key.is_empty()
    }
}

impl NotifyConfig {
    /// Rejects partial or malformed credential sets.
    fn validate(&self) -> Result<(), ConfigError> {
        let credentials = [
            ("notify.service_id", &self.service_id),
            ("notify.template_id", &self.template_id),
            ("notify.public_key", &self.public_key),
        ];
        let present = credentials.iter().filter(|(_, value)| !value.is_empty()).count();
        if present != 0 && present != credentials.len() {
            return Err(ConfigError::Invalid(
                "notify section must set service_id, template_id, and public_key together"
                    .to_string(),
            ));
        }
        for (field, value) in credentials {
            if value.len() > MAX_CREDENTIAL_LENGTH {
                return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "{field} must not contain whitespace"
                )));
            }
        }
        validate_timeout("notify.timeout_ms", self.timeout_ms)?;
        Ok(())
    }
}

impl OriginConfig {
    /// Rejects malformed lookup endpoints and out-of-range timeouts.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint("origin.primary_endpoint", &self.primary_endpoint)?;
        validate_endpoint("origin.fallback_endpoint", &self.fallback_endpoint)?;
        validate_timeout("origin.timeout_ms", self.timeout_ms)
    }
}

impl StoreConfig {
    /// Rejects unusable store paths and timeouts.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.busy_timeout_ms > MAX_REQUEST_TIMEOUT_MS {
            return Err(ConfigError::Invalid("store.busy_timeout_ms too large".to_string()));
        }
        let text = self.path.to_string_lossy();
        if text.trim().is_empty() {
            return Err(ConfigError::Invalid("store.path must be non-empty".to_string()));
        }
        if text.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("store.path exceeds max length".to_string()));
        }
        for component in self.path.components() {
            let value = component.as_os_str().to_string_lossy();
            if value.len() > MAX_PATH_COMPONENT_LENGTH {
                return Err(ConfigError::Invalid(
                    "store.path component too long".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Rejects over-long paths and path components.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Rejects endpoints that are empty, over-long, or not http(s).
fn validate_endpoint(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_ENDPOINT_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if !value.starts_with("https://") && !value.starts_with("http://") {
        return Err(ConfigError::Invalid(format!(
            "{field} must use the http or https scheme"
        )));
    }
    Ok(())
}

/// Rejects timeouts outside the accepted range.
fn validate_timeout(field: &str, value: u64) -> Result<(), ConfigError> {
    if !(MIN_REQUEST_TIMEOUT_MS..=MAX_REQUEST_TIMEOUT_MS).contains(&value) {
        return Err(ConfigError::Invalid(format!(
            "{field} must be between {MIN_REQUEST_TIMEOUT_MS} and {MAX_REQUEST_TIMEOUT_MS}"
        )));
    }
    Ok(())
}
