// crates/vapt-intake-core/src/runtime/memory.rs
// ============================================================================
// Module: In-Memory Submission Sink
// Description: Mutex-guarded in-process submission store.
// Purpose: Default sink for hosts and tests that need no durability.
// Dependencies: crate::core, crate::interfaces, std::sync
// ============================================================================

//! ## Overview
//! [`InMemorySubmissionSink`] keeps stored submissions in a mutex-guarded
//! vector in arrival order and mints sequential identifiers. Capture time and
//! origin lookup are injected so tests can pin both; the defaults are the
//! system clock and the `Unknown` origin sentinel.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use crate::core::draft::SubmissionDraft;
use crate::core::submission::OriginAddress;
use crate::core::submission::StoredSubmission;
use crate::core::submission::SubmissionId;
use crate::core::submission::enrich;
use crate::interfaces::CaptureClock;
use crate::interfaces::OriginResolver;
use crate::interfaces::StoreError;
use crate::interfaces::SubmissionSink;
use crate::interfaces::SystemClock;

// ============================================================================
// SECTION: In-Memory Sink
// ============================================================================

/// In-process submission sink backed by a mutex-guarded vector.
///
/// # Invariants
/// - Records are held in arrival order.
/// - Identifiers are `submission-{seq}` with `seq` starting at 1 and never
///   reused within one sink instance.
pub struct InMemorySubmissionSink {
    /// Stored records in arrival order.
    records: Mutex<Vec<StoredSubmission>>,
    /// Next identifier sequence number.
    next_seq: AtomicU64,
    /// Capture clock for submission timestamps.
    clock: Box<dyn CaptureClock + Send + Sync>,
    /// Optional origin lookup; absent means the `Unknown` sentinel.
    resolver: Option<Box<dyn OriginResolver + Send + Sync>>,
}

impl InMemorySubmissionSink {
    /// Creates an empty sink using the system clock and no origin resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_seq: AtomicU64::new(1),
            clock: Box::new(SystemClock),
            resolver: None,
        }
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

    /// Removes all stored records. The identifier sequence is not reset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Store`] when the record mutex is poisoned.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("submission store mutex poisoned".to_string()))?;
        records.clear();
        Ok(())
    }
}

impl Default for InMemorySubmissionSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionSink for InMemorySubmissionSink {
    fn store(&self, draft: &SubmissionDraft) -> Result<StoredSubmission, StoreError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let id = SubmissionId::new(format!("submission-{seq}"));
        let captured_at = self.clock.now();
        let origin = self
            .resolver
            .as_ref()
            .map_or_else(OriginAddress::unknown, |resolver| resolver.resolve());
        let stored = enrich(draft, id, captured_at, origin);
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("submission store mutex poisoned".to_string()))?;
        records.push(stored.clone());
        Ok(stored)
    }

    fn list_submissions(&self) -> Result<Vec<StoredSubmission>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("submission store mutex poisoned".to_string()))?;
        Ok(records.clone())
    }
}
