//! Mock record store for deterministic testing.
//!
//! Records every call so tests can assert which external calls would have
//! been made (or that none were), and supports scripted failures for each
//! write phase.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use musebox_core::{Error, NewRecord, RecordPatch, RecordStore, Result};

/// One observed store call, with the payload it carried.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Create(NewRecord),
    Update(String, RecordPatch),
}

#[derive(Debug, Clone, Default)]
struct MockConfig {
    record_id: Option<String>,
    fail_create: bool,
    fail_update: bool,
}

/// Mock [`RecordStore`] with builder-style configuration and a call log.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockRecordStore {
    /// Create a new mock store that succeeds on both phases.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed record id instead of generated ones.
    pub fn with_record_id(mut self, id: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).record_id = Some(id.into());
        self
    }

    /// Fail every create call.
    pub fn fail_create(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail_create = true;
        self
    }

    /// Fail every update call.
    pub fn fail_update(mut self) -> Self {
        Arc::make_mut(&mut self.config).fail_update = true;
        self
    }

    /// All calls observed so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of calls observed so far.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create(&self, record: &NewRecord) -> Result<String> {
        self.call_log
            .lock()
            .unwrap()
            .push(MockCall::Create(record.clone()));
        if self.config.fail_create {
            return Err(Error::Request("mock create failure".to_string()));
        }
        let id = self
            .config
            .record_id
            .clone()
            .unwrap_or_else(|| format!("mock-record-{}", self.call_count()));
        Ok(id)
    }

    async fn update(&self, record_id: &str, patch: &RecordPatch) -> Result<()> {
        self.call_log
            .lock()
            .unwrap()
            .push(MockCall::Update(record_id.to_string(), patch.clone()));
        if self.config.fail_update {
            return Err(Error::Request("mock update failure".to_string()));
        }
        Ok(())
    }
}
