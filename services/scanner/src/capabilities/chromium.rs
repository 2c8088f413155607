//! Chromium-backed browser and audit implementation
//!
//! Launches a headless Chromium over CDP, navigates to the target page, and
//! evaluates the embedded audit ruleset in the page context. The ruleset
//! returns findings in the engine wire format, which deserializes straight
//! into `types::Finding`.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use types::errors::{AuditError, BrowserError};
use types::finding::Finding;

use super::audit::{filter_by_kind, AuditOptions};
use super::browser::{BrowserProvider, BrowserSession, LaunchOptions};

/// Audit ruleset evaluated in the page context. Returns an array of
/// `{type, code, message, selector, context}` objects.
const RULESET: &str = include_str!("ruleset.js");

/// Chromium launch flags for sandboxed hosting environments where the
/// browser cannot create user namespaces.
const NO_SANDBOX_ARGS: &[&str] = &["--no-sandbox", "--disable-setuid-sandbox"];

/// Launches one Chromium instance per acquired session.
#[derive(Debug, Default)]
pub struct ChromiumProvider;

impl ChromiumProvider {
    pub fn new() -> Self {
        Self
    }

    fn build_config(options: &LaunchOptions) -> Result<BrowserConfig, BrowserError> {
        let mut builder = BrowserConfig::builder();
        if !options.headless {
            builder = builder.with_head();
        }
        if options.no_sandbox {
            builder = builder.args(NO_SANDBOX_ARGS.to_vec());
        }
        if !options.extra_args.is_empty() {
            builder = builder.args(options.extra_args.clone());
        }
        builder.build().map_err(BrowserError::InvalidConfig)
    }
}

#[async_trait]
impl BrowserProvider for ChromiumProvider {
    async fn acquire(
        &self,
        options: &LaunchOptions,
    ) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let config = Self::build_config(options)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // The handler must be polled for the lifetime of the session; it
        // drives every CDP message between us and the browser process.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("chromium session launched");
        Ok(Box::new(ChromiumSession {
            browser,
            handler_task,
        }))
    }
}

/// One launched Chromium instance, torn down on `release`.
pub struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl ChromiumSession {
    async fn run_audit(&self, url: &Url) -> Result<Vec<Finding>, AuditError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| AuditError::Engine(e.to_string()))?;

        page.goto(url.as_str())
            .await
            .map_err(|e| AuditError::Navigation(e.to_string()))?;
        page.wait_for_navigation()
            .await
            .map_err(|e| AuditError::Navigation(e.to_string()))?;

        page.evaluate(RULESET)
            .await
            .map_err(|e| AuditError::Engine(e.to_string()))?
            .into_value::<Vec<Finding>>()
            .map_err(|e| AuditError::Engine(format!("malformed ruleset output: {e}")))
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn audit(&self, url: &Url, options: &AuditOptions) -> Result<Vec<Finding>, AuditError> {
        let findings = tokio::time::timeout(options.timeout, self.run_audit(url))
            .await
            .map_err(|_| AuditError::Timeout {
                seconds: options.timeout.as_secs(),
            })??;

        debug!(url = %url, raw = findings.len(), "ruleset evaluation complete");
        Ok(filter_by_kind(findings, options))
    }

    async fn release(mut self: Box<Self>) {
        if let Err(err) = self.browser.close().await {
            warn!(error = %err, "browser close failed");
        }
        if let Err(err) = self.browser.wait().await {
            debug!(error = %err, "browser process wait failed");
        }
        self.handler_task.abort();
    }
}
