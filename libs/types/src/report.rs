//! Enriched findings and the scan report envelope

use serde::{Deserialize, Serialize};

use crate::finding::Finding;
use crate::severity::Severity;

/// A finding augmented with a severity tier and a remediation suggestion.
///
/// Invariant: `suggestion` is never empty — the enrichment pipeline always
/// falls back to a deterministic remediation string when AI enrichment is
/// unavailable or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedFinding {
    #[serde(flatten)]
    pub finding: Finding,
    pub severity: Severity,
    pub suggestion: String,
}

/// Per-severity issue counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySummary {
    pub critical: usize,
    pub moderate: usize,
    pub minor: usize,
}

impl SeveritySummary {
    /// Tally counts over a slice of enriched findings.
    pub fn tally(issues: &[EnrichedFinding]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => summary.critical += 1,
                Severity::Moderate => summary.moderate += 1,
                Severity::Minor => summary.minor += 1,
            }
        }
        summary
    }

    /// Total number of issues counted.
    pub fn total(&self) -> usize {
        self.critical + self.moderate + self.minor
    }
}

/// Response envelope for a successful scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub issues: Vec<EnrichedFinding>,
    pub summary: SeveritySummary,
}

impl ScanReport {
    /// Build a report from enriched findings, tallying the summary.
    pub fn new(issues: Vec<EnrichedFinding>) -> Self {
        let summary = SeveritySummary::tally(&issues);
        Self { issues, summary }
    }
}
