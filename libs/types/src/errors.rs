//! Error types for the scan service
//!
//! Comprehensive error taxonomy using thiserror

use thiserror::Error;

/// Top-level scan error
///
/// Terminal outcome of a scan request. Enrichment degradation is absent by
/// design: a failed inference call is absorbed per-finding and never
/// surfaces here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Target URL is required")]
    MissingUrl,

    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

/// Browser-session errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Invalid launch configuration: {0}")]
    InvalidConfig(String),

    #[error("Browser session lost: {0}")]
    SessionLost(String),
}

/// Audit-execution errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuditError {
    #[error("Audit timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Audit engine error: {0}")]
    Engine(String),
}

/// Inference-capability errors
///
/// Always absorbed by the enricher's fallback path; carried here so the
/// degradation can be logged with its cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    #[error("No inference credential configured")]
    Unconfigured,

    #[error("Inference request failed: {0}")]
    Http(String),

    #[error("Inference endpoint returned status {status}")]
    Status { status: u16 },

    #[error("Malformed inference response: {0}")]
    MalformedResponse(String),

    #[error("Inference returned empty content")]
    EmptyCompletion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_display() {
        let err = ScanError::InvalidUrl("not-a-url".to_string());
        assert_eq!(err.to_string(), "Invalid target URL: not-a-url");
    }

    #[test]
    fn test_audit_timeout_display() {
        let err = AuditError::Timeout { seconds: 20 };
        assert!(err.to_string().contains("20s"));
    }

    #[test]
    fn test_scan_error_from_browser_error() {
        let browser_err = BrowserError::LaunchFailed("no chrome binary".to_string());
        let scan_err: ScanError = browser_err.into();
        assert!(matches!(scan_err, ScanError::Browser(_)));
    }

    #[test]
    fn test_scan_error_from_audit_error() {
        let audit_err = AuditError::Navigation("DNS resolution failed".to_string());
        let scan_err: ScanError = audit_err.into();
        assert!(matches!(scan_err, ScanError::Audit(_)));
    }
}
