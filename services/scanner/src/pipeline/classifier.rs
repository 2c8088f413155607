//! Severity classifier
//!
//! Maps the engine's raw kind string onto a user-facing severity tier.

use types::severity::Severity;

/// Classify a raw kind string.
///
/// Exact match on the lower-cased kind: "error" is Critical, "warning" is
/// Moderate, and everything else — "notice" included, as well as kinds we
/// have never seen — defaults to Minor. Total over all string inputs.
pub fn classify(kind: &str) -> Severity {
    match kind.to_ascii_lowercase().as_str() {
        "error" => Severity::Critical,
        "warning" => Severity::Moderate,
        _ => Severity::Minor,
    }
}
