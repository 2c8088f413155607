//! Scan orchestration
//!
//! Owns the browser session for the duration of one scan: validate the
//! target URL, acquire a session, audit, enrich, and release the session
//! exactly once on every exit path after acquisition.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use types::errors::ScanError;
use types::ids::ScanId;
use types::report::EnrichedFinding;

use crate::capabilities::audit::AuditOptions;
use crate::capabilities::browser::{BrowserProvider, BrowserSession, LaunchOptions};
use crate::pipeline::enrich::IssueEnricher;

/// Options for one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub launch: LaunchOptions,
    pub audit: AuditOptions,
}

/// Coordinates one scan per call: browser lifecycle, audit, enrichment.
pub struct ScanOrchestrator {
    browser: Arc<dyn BrowserProvider>,
    enricher: IssueEnricher,
    options: ScanOptions,
}

impl ScanOrchestrator {
    pub fn new(browser: Arc<dyn BrowserProvider>, enricher: IssueEnricher) -> Self {
        Self::with_options(browser, enricher, ScanOptions::default())
    }

    pub fn with_options(
        browser: Arc<dyn BrowserProvider>,
        enricher: IssueEnricher,
        options: ScanOptions,
    ) -> Self {
        Self {
            browser,
            enricher,
            options,
        }
    }

    /// Run one scan against `raw_url`.
    ///
    /// Input validation happens before any resource is acquired; after
    /// acquisition the session is released unconditionally before the
    /// outcome — success or failure — propagates to the caller. Zero
    /// findings is a success, not an error.
    pub async fn scan(&self, raw_url: &str) -> Result<Vec<EnrichedFinding>, ScanError> {
        let url = validate_url(raw_url)?;
        let scan_id = ScanId::new();
        info!(scan_id = %scan_id, url = %url, "scan started");

        let session = self.browser.acquire(&self.options.launch).await?;

        // Single release point: audit and enrichment run first, the session
        // is torn down, and only then does their outcome propagate.
        let outcome = self.audit_and_enrich(&url, session.as_ref()).await;
        session.release().await;

        match &outcome {
            Ok(issues) => info!(scan_id = %scan_id, issues = issues.len(), "scan complete"),
            Err(err) => warn!(scan_id = %scan_id, error = %err, "scan failed"),
        }
        outcome
    }

    async fn audit_and_enrich(
        &self,
        url: &Url,
        session: &dyn BrowserSession,
    ) -> Result<Vec<EnrichedFinding>, ScanError> {
        let findings = session.audit(url, &self.options.audit).await?;
        debug!(url = %url, findings = findings.len(), "audit produced raw findings");
        Ok(self.enricher.enrich(findings).await)
    }
}

/// Validate that the target is a parseable absolute URL.
fn validate_url(raw: &str) -> Result<Url, ScanError> {
    if raw.trim().is_empty() {
        return Err(ScanError::MissingUrl);
    }
    Url::parse(raw).map_err(|_| ScanError::InvalidUrl(raw.to_string()))
}
