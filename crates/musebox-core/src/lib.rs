//! # musebox-core
//!
//! Core types, traits, and abstractions for the musebox evaluation relay.
//!
//! This crate provides the request/record data model, the `RecordStore`
//! trait that external record stores implement, and the two-phase writer
//! that performs the create-then-enrich sequence.

pub mod error;
pub mod logging;
pub mod models;
pub mod traits;
pub mod writer;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    EvaluationRequest, NewRecord, RecordPatch, RecordStatus, TITLE_ELLIPSIS, TITLE_MAX_CHARS,
};
pub use traits::RecordStore;
pub use writer::{TwoPhaseWriter, WriteError, WriteReceipt};
