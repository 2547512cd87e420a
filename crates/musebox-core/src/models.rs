//! Data model for the evaluation relay.
//!
//! An [`EvaluationRequest`] is the transient inbound payload; [`NewRecord`]
//! and [`RecordPatch`] are its two projections onto the external record
//! store, one per write phase.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum length of a record title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Marker appended to a truncated title.
pub const TITLE_ELLIPSIS: &str = "...";

/// The three required payload fields, in reporting order.
const REQUIRED_FIELDS: [&str; 3] = [
    "inspiration_content",
    "priority_result",
    "suggestion_detail",
];

/// An agent's evaluation result, valid for the duration of one invocation.
///
/// `priority_result` is enum-like ({high, medium, low}) but is deliberately
/// not validated against that set here; it is forwarded as-is and the record
/// store's own schema is the arbiter. Stricter callers can check before
/// submitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The raw inspiration capture being evaluated.
    pub inspiration_content: String,
    /// Priority label assigned by the agent.
    pub priority_result: String,
    /// The agent's actionable advice.
    pub suggestion_detail: String,
}

impl EvaluationRequest {
    /// Extract a request from an arbitrary JSON body.
    ///
    /// Every required field must be present, string-typed, and non-empty.
    /// On failure returns the names of all offending fields so the caller
    /// can report them in one round trip.
    pub fn from_json(body: &Value) -> std::result::Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        let mut field = |name: &'static str| -> String {
            match body.get(name).and_then(Value::as_str) {
                Some(s) if !s.is_empty() => s.to_string(),
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let inspiration_content = field(REQUIRED_FIELDS[0]);
        let priority_result = field(REQUIRED_FIELDS[1]);
        let suggestion_detail = field(REQUIRED_FIELDS[2]);

        if missing.is_empty() {
            Ok(Self {
                inspiration_content,
                priority_result,
                suggestion_detail,
            })
        } else {
            Err(missing)
        }
    }

    /// Title projection: the content truncated to [`TITLE_MAX_CHARS`]
    /// characters with [`TITLE_ELLIPSIS`] appended iff truncation occurred.
    ///
    /// Truncation counts Unicode scalar values, never splitting a multi-byte
    /// character.
    pub fn title(&self) -> String {
        let mut chars = self.inspiration_content.chars();
        let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
        if chars.next().is_some() {
            format!("{}{}", head, TITLE_ELLIPSIS)
        } else {
            head
        }
    }
}

/// Lifecycle status of an external record.
///
/// `Pending` is set at creation (phase A); `Processed` only ever arrives
/// together with priority and advice (phase B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Processed,
}

impl RecordStatus {
    /// The wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Processed => "processed",
        }
    }
}

/// Phase-A projection: the fields sent when creating a record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    /// Truncated title (see [`EvaluationRequest::title`]).
    pub title: String,
    /// The full, untruncated content, stored as the record body.
    pub body: String,
    /// Always [`RecordStatus::Pending`] at creation.
    pub status: RecordStatus,
}

impl NewRecord {
    pub fn from_request(req: &EvaluationRequest) -> Self {
        Self {
            title: req.title(),
            body: req.inspiration_content.clone(),
            status: RecordStatus::Pending,
        }
    }
}

/// Phase-B projection: the enrichment fields, only ever set together.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPatch {
    pub priority: String,
    pub advice: String,
    /// Always [`RecordStatus::Processed`] after enrichment.
    pub status: RecordStatus,
}

impl RecordPatch {
    pub fn from_request(req: &EvaluationRequest) -> Self {
        Self {
            priority: req.priority_result.clone(),
            advice: req.suggestion_detail.clone(),
            status: RecordStatus::Processed,
        }
    }
}
