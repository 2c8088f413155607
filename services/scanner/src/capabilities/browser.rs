//! Browser-automation capability seam
//!
//! A `BrowserProvider` hands out exclusively-owned sessions; the audit
//! capability is reached through the session itself. `release` consumes the
//! session, so the exactly-once teardown contract is visible in the types:
//! a released session cannot be audited or released again.

use async_trait::async_trait;
use url::Url;

use types::errors::{AuditError, BrowserError};
use types::finding::Finding;

use super::audit::AuditOptions;

/// Launch options for one browser session.
///
/// Defaults target restricted hosting environments: headless, with the
/// sandbox flags Chromium needs when it cannot create user namespaces.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub headless: bool,
    pub no_sandbox: bool,
    pub extra_args: Vec<String>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            no_sandbox: true,
            extra_args: Vec::new(),
        }
    }
}

/// Acquires browser sessions, one per scan.
#[async_trait]
pub trait BrowserProvider: Send + Sync {
    /// Launch a browser and hand back an exclusively-owned session handle.
    async fn acquire(&self, options: &LaunchOptions)
        -> Result<Box<dyn BrowserSession>, BrowserError>;
}

/// One acquired browser session.
///
/// `Sync` is required: the orchestrator audits through a shared reference
/// held across await points, and the scan future must stay `Send` for the
/// HTTP handler to spawn it.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Navigate to `url` and run the accessibility audit against the loaded
    /// page, bounded by the timeout in `options`.
    async fn audit(&self, url: &Url, options: &AuditOptions) -> Result<Vec<Finding>, AuditError>;

    /// Tear the session down. Consumes the handle; must be called exactly
    /// once per acquired session, on every exit path.
    async fn release(self: Box<Self>);
}
