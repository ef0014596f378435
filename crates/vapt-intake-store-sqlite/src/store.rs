// crates/vapt-intake-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Submission Store
// Description: Durable SubmissionSink backed by SQLite WAL.
// Purpose: Persist enriched submission records in arrival order.
// Dependencies: vapt-intake-core, rand, rusqlite, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This module implements a durable [`SubmissionSink`] using `SQLite`. Each
//! store call enriches the draft with an identifier, capture timestamps, and
//! the origin address, then appends one JSON row. Listing returns rows in
//! insertion order and fails closed when a stored row does not deserialize.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::Connection;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::params;
use thiserror::Error;
use vapt_intake_core::CaptureClock;
use vapt_intake_core::OriginAddress;
use vapt_intake_core::OriginResolver;
use vapt_intake_core::StoreError;
use vapt_intake_core::StoredSubmission;
use vapt_intake_core::SubmissionDraft;
use vapt_intake_core::SubmissionId;
use vapt_intake_core::SubmissionSink;
use vapt_intake_core::SystemClock;
use vapt_intake_core::enrich;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SQLite` schema version for the store.
const SCHEMA_VERSION: i64 = 1;
/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum serialized submission size accepted by the store.
pub const MAX_SUBMISSION_BYTES: usize = 256 * 1024;

// ============================================================================
// SECTION: Config
// ============================================================================

/// Configuration for the `SQLite` submission store.
///
/// # Invariants
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout applied to the connection.
    pub busy_timeout_ms: u64,
}

impl SqliteStoreConfig {
    /// Creates a config for the given database path with default limits.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced by the `SQLite` submission store.
///
/// # Invariants
/// - Error messages avoid embedding submission payloads.
#[derive(Debug, Error, Clone)]
pub enum SqliteStoreError {
    /// Store I/O error.
    #[error("sqlite store io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite store db error: {0}")]
    Db(String),
    /// Store corruption detected while reading.
    #[error("sqlite store corruption: {0}")]
    Corrupt(String),
    /// Store schema version mismatch.
    #[error("sqlite store version mismatch: {0}")]
    VersionMismatch(String),
    /// Invalid store data or configuration.
    #[error("sqlite store invalid data: {0}")]
    Invalid(String),
}

impl From<SqliteStoreError> for StoreError {
    fn from(error: SqliteStoreError) -> Self {
        match error {
            SqliteStoreError::Io(message) => Self::Io(message),
            SqliteStoreError::Db(message) => Self::Store(message),
            SqliteStoreError::Corrupt(message) | SqliteStoreError::VersionMismatch(message) => {
                Self::Corrupt(message)
            }
            SqliteStoreError::Invalid(message) => Self::Invalid(message),
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed submission sink with WAL journaling.
///
/// # Invariants
/// - Connection access is serialized through a mutex.
/// - Rows are appended only; listing preserves insertion order.
/// - Identifiers embed the capture instant and random entropy, so collisions
///   across store instances are not a practical concern.
pub struct SqliteSubmissionStore {
    /// Shared connection guarded by a mutex.
    connection: Mutex<Connection>,
    /// Capture clock for submission timestamps.
    clock: Box<dyn CaptureClock + Send + Sync>,
    /// Optional origin lookup; absent means the `Unknown` sentinel.
    resolver: Option<Box<dyn OriginResolver + Send + Sync>>,
}

impl std::fmt::Debug for SqliteSubmissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSubmissionStore").finish_non_exhaustive()
    }
}

impl SqliteSubmissionStore {
    /// Opens or creates the store at the configured path.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the path is unusable, the database
    /// cannot be opened, or the schema version does not match.
    pub fn new(config: &SqliteStoreConfig) -> Result<Self, SqliteStoreError> {
        validate_store_path(config)?;
        let mut connection = open_connection(config)?;
        initialize_schema(&mut connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
            clock: Box::new(SystemClock),
            resolver: None,
        })
    }

    /// Replaces the capture clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn CaptureClock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Installs an origin resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn OriginResolver + Send + Sync>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Deletes all stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the delete fails.
    pub fn clear(&self) -> Result<(), SqliteStoreError> {
        let connection =
            lock_connection(&self.connection).map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        connection
            .execute("DELETE FROM submissions", params![])
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        Ok(())
    }

    /// Mints a submission identifier from the capture instant and entropy.
    fn mint_id(captured_at_millis: i128) -> SubmissionId {
        let entropy: u32 = rand::random();
        SubmissionId::new(format!("{captured_at_millis}-{entropy:08x}"))
    }
}

impl SubmissionSink for SqliteSubmissionStore {
    fn store(&self, draft: &SubmissionDraft) -> Result<StoredSubmission, StoreError> {
        let captured_at = self.clock.now();
        let id = Self::mint_id(captured_at.unix_timestamp_nanos() / 1_000_000);
        let origin = self
            .resolver
            .as_ref()
            .map_or_else(OriginAddress::unknown, |resolver| resolver.resolve());
        let stored = enrich(draft, id, captured_at, origin);
        let body = serde_json::to_vec(&stored)
            .map_err(|err| StoreError::Invalid(err.to_string()))?;
        if body.len() > MAX_SUBMISSION_BYTES {
            return Err(StoreError::Invalid(format!(
                "submission exceeds size limit: {} bytes (max {MAX_SUBMISSION_BYTES})",
                body.len()
            )));
        }
        let connection = lock_connection(&self.connection)?;
        connection
            .execute(
                "INSERT INTO submissions (submission_id, submitted_at, body) VALUES (?1, ?2, ?3)",
                params![stored.id.as_str(), stored.submitted_at, body],
            )
            .map_err(|err| StoreError::Store(err.to_string()))?;
        Ok(stored)
    }

    fn list_submissions(&self) -> Result<Vec<StoredSubmission>, StoreError> {
        let connection = lock_connection(&self.connection)?;
        let mut statement = connection
            .prepare("SELECT body FROM submissions ORDER BY seq ASC")
            .map_err(|err| StoreError::Store(err.to_string()))?;
        let rows = statement
            .query_map(params![], |row| row.get::<_, Vec<u8>>(0))
            .map_err(|err| StoreError::Store(err.to_string()))?;
        let mut submissions = Vec::new();
        for row in rows {
            let body = row.map_err(|err| StoreError::Store(err.to_string()))?;
            let stored: StoredSubmission = serde_json::from_slice(&body)
                .map_err(|err| StoreError::Corrupt(err.to_string()))?;
            submissions.push(stored);
        }
        Ok(submissions)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Locks the connection, converting mutex poisoning into a store error.
fn lock_connection(
    connection: &Mutex<Connection>,
) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
    connection
        .lock()
        .map_err(|_| StoreError::Store("submission store mutex poisoned".to_string()))
}

/// Rejects unusable store paths before opening the database.
fn validate_store_path(config: &SqliteStoreConfig) -> Result<(), SqliteStoreError> {
    let text = config.path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(SqliteStoreError::Invalid("store path must be non-empty".to_string()));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteStoreError::Invalid("store path exceeds max length".to_string()));
    }
    for component in config.path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SqliteStoreError::Invalid(
                "store path component too long".to_string(),
            ));
        }
    }
    if config.path.exists() && config.path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "store path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Opens an `SQLite` connection with WAL journaling and a busy timeout.
fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch("PRAGMA journal_mode = WAL;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch("PRAGMA synchronous = NORMAL;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(connection)
}

/// Initializes the `SQLite` schema or validates the existing version.
fn initialize_schema(connection: &mut Connection) -> Result<(), SqliteStoreError> {
    let tx = connection.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    tx.execute_batch("CREATE TABLE IF NOT EXISTS store_meta (version INTEGER NOT NULL);")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    let version: Option<i64> = tx
        .query_row("SELECT version FROM store_meta LIMIT 1", params![], |row| row.get(0))
        .optional()
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    match version {
        None => {
            tx.execute("INSERT INTO store_meta (version) VALUES (?1)", params![SCHEMA_VERSION])
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS submissions (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    submission_id TEXT NOT NULL UNIQUE,
                    submitted_at TEXT NOT NULL,
                    body BLOB NOT NULL
                );",
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        }
        Some(found) if found == SCHEMA_VERSION => {}
        Some(found) => {
            return Err(SqliteStoreError::VersionMismatch(format!(
                "store schema version {found} does not match expected {SCHEMA_VERSION}"
            )));
        }
    }
    tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))
}
