//! The two-phase writer: create a record, then enrich it.
//!
//! Phase A establishes the record (`pending`, truncated title, full body).
//! Phase B sets priority, advice, and final status together. Phase B never
//! starts before phase A's response is received, and nothing is retried or
//! rolled back: a phase-B failure leaves an orphaned `pending` record whose
//! id is carried in the error for manual remediation.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::models::{EvaluationRequest, NewRecord, RecordPatch};
use crate::traits::RecordStore;

/// Outcome of a successful two-phase write.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReceipt {
    /// The store-assigned id of the created-and-enriched record.
    pub record_id: String,
    /// The priority label that was written, echoed for the caller.
    pub priority: String,
}

/// A two-phase write failure, split by how far the sequence got.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Phase A failed: no record exists, no side effect.
    #[error("failed to create record: {source}")]
    Create {
        #[source]
        source: Error,
    },

    /// Phase B failed after phase A succeeded: an orphaned `pending` record
    /// exists in the store under `record_id`.
    #[error("failed to enrich record {record_id}: {source}")]
    Enrich {
        record_id: String,
        #[source]
        source: Error,
    },
}

impl WriteError {
    /// The orphaned record's id, if phase A completed.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            WriteError::Create { .. } => None,
            WriteError::Enrich { record_id, .. } => Some(record_id),
        }
    }

    /// The underlying store error's text.
    pub fn details(&self) -> String {
        match self {
            WriteError::Create { source } | WriteError::Enrich { source, .. } => {
                source.to_string()
            }
        }
    }
}

/// Performs the create-then-enrich sequence against a [`RecordStore`].
///
/// Holds only a shared handle to the store; each call is independent and
/// there is no in-process state across invocations. Resubmitting the same
/// request creates a second record (no dedup key).
#[derive(Clone)]
pub struct TwoPhaseWriter {
    store: Arc<dyn RecordStore>,
}

impl TwoPhaseWriter {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Run both phases sequentially and report a single consolidated result.
    pub async fn write(&self, req: &EvaluationRequest) -> Result<WriteReceipt, WriteError> {
        let record = NewRecord::from_request(req);
        debug!(title = %record.title, "Creating record");

        let record_id = self
            .store
            .create(&record)
            .await
            .map_err(|source| WriteError::Create { source })?;
        info!(record_id = %record_id, "Record created");

        let patch = RecordPatch::from_request(req);
        if let Err(source) = self.store.update(&record_id, &patch).await {
            warn!(record_id = %record_id, error = %source, "Enrichment failed, record left pending");
            return Err(WriteError::Enrich { record_id, source });
        }
        info!(record_id = %record_id, priority = %patch.priority, "Record enriched");

        Ok(WriteReceipt {
            record_id,
            priority: patch.priority,
        })
    }
}
