//! Audit execution options and raw-finding post-processing
//!
//! The engine always reports everything it finds; warning- and notice-level
//! findings are filtered out here when the caller opted out of them. Kinds
//! the engine could not categorize are always retained and fall through to
//! the classifier's permissive default.

use std::time::Duration;

use types::finding::Finding;

/// Default audit timeout covering navigation plus ruleset execution.
pub const DEFAULT_AUDIT_TIMEOUT: Duration = Duration::from_secs(20);

/// Options for one audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Bound on navigation plus ruleset execution.
    pub timeout: Duration,
    /// Include warning-level findings, not only hard errors.
    pub include_warnings: bool,
    /// Include advisory-level findings.
    pub include_notices: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_AUDIT_TIMEOUT,
            include_warnings: true,
            include_notices: true,
        }
    }
}

/// Drop warning/notice findings the caller opted out of.
///
/// Error findings and unrecognized kinds always pass through.
pub fn filter_by_kind(findings: Vec<Finding>, options: &AuditOptions) -> Vec<Finding> {
    findings
        .into_iter()
        .filter(|finding| match finding.kind.to_ascii_lowercase().as_str() {
            "warning" => options.include_warnings,
            "notice" => options.include_notices,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(kind: &str) -> Finding {
        Finding {
            kind: kind.to_string(),
            code: "image-alt".to_string(),
            message: "Image is missing an alt attribute".to_string(),
            selector: None,
            context: None,
        }
    }

    #[test]
    fn test_default_options_keep_everything() {
        let findings = vec![finding("error"), finding("warning"), finding("notice")];
        let kept = filter_by_kind(findings, &AuditOptions::default());
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_warnings_filtered_when_excluded() {
        let options = AuditOptions {
            include_warnings: false,
            ..AuditOptions::default()
        };
        let findings = vec![finding("error"), finding("Warning"), finding("notice")];
        let kept = filter_by_kind(findings, &options);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|f| f.kind.to_lowercase() != "warning"));
    }

    #[test]
    fn test_notices_filtered_when_excluded() {
        let options = AuditOptions {
            include_notices: false,
            ..AuditOptions::default()
        };
        let findings = vec![finding("notice"), finding("error")];
        let kept = filter_by_kind(findings, &options);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind, "error");
    }

    #[test]
    fn test_unrecognized_kinds_always_retained() {
        let options = AuditOptions {
            include_warnings: false,
            include_notices: false,
            ..AuditOptions::default()
        };
        let findings = vec![finding("advisory"), finding("")];
        let kept = filter_by_kind(findings, &options);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_default_timeout_is_twenty_seconds() {
        assert_eq!(AuditOptions::default().timeout, Duration::from_secs(20));
    }
}
