//! # musebox-notion
//!
//! Notion implementation of the musebox [`RecordStore`] trait, plus a mock
//! store for deterministic testing.
//!
//! [`RecordStore`]: musebox_core::RecordStore

pub mod client;
pub mod mock;
pub mod types;

pub use client::{NotionConfig, NotionStore, DEFAULT_NOTION_URL, DEFAULT_TIMEOUT_SECS};
pub use mock::{MockCall, MockRecordStore};
