//! Core traits for musebox abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable record stores and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{NewRecord, RecordPatch};

/// An external store of structured records (a database-like collection of
/// pages/items with typed fields).
///
/// The record id returned by [`create`](RecordStore::create) is an opaque
/// capability assigned by the store; it is required for the subsequent
/// [`update`](RecordStore::update) and is never persisted by this process.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create a new record under the configured collection.
    ///
    /// Returns the store-assigned record id.
    async fn create(&self, record: &NewRecord) -> Result<String>;

    /// Update an existing record's enrichment fields.
    async fn update(&self, record_id: &str, patch: &RecordPatch) -> Result<()>;
}
