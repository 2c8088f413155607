//! Raw audit findings as reported by the audit engine
//!
//! A `Finding` is read-only once produced: the engine emits it, the pipeline
//! classifies and enriches it, and nothing is persisted beyond the request.

use serde::{Deserialize, Serialize};

/// One raw accessibility violation reported by the audit engine.
///
/// `kind` is kept as the raw string the engine reported ("error", "warning",
/// "notice", or anything else) rather than an enum, so unrecognized kinds
/// flow through the classifier's permissive default instead of failing
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Raw kind string from the engine.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rule identifier, e.g. "image-alt".
    pub code: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// DOM path of the offending element, when the engine could compute one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    /// Surrounding markup snippet, truncated by the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Finding {
    /// Selector for display, with a placeholder when the engine omitted one.
    pub fn selector_or_placeholder(&self) -> &str {
        self.selector.as_deref().unwrap_or("N/A")
    }
}
