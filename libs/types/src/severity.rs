//! Severity tiers assigned to audit findings
//!
//! The audit engine reports a raw kind string per finding; the pipeline maps
//! it onto one of three user-facing tiers. Serialized by variant name so the
//! wire strings stay "Critical" / "Moderate" / "Minor".

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing severity tier for one finding.
///
/// Ordered ascending so `Critical` compares greatest, which lets callers
/// sort a report worst-first with a plain descending sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Advisory findings and anything the engine could not categorize.
    Minor,
    /// Warning-level findings.
    Moderate,
    /// Hard structural errors.
    Critical,
}

impl Severity {
    /// Static display string, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "Minor",
            Severity::Moderate => "Moderate",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
