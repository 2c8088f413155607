//! Shared application state

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::info;

use crate::capabilities::browser::BrowserProvider;
use crate::capabilities::chromium::ChromiumProvider;
use crate::capabilities::inference::{HfClient, InferenceClient};
use crate::config::ScannerConfig;
use crate::pipeline::enrich::IssueEnricher;
use crate::pipeline::scan::{ScanOptions, ScanOrchestrator};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ScanOrchestrator>,
    /// Bounds concurrent scans; each in-flight scan owns a browser process.
    pub scan_permits: Arc<Semaphore>,
}

impl AppState {
    /// Wire the production pipeline from configuration.
    pub fn from_config(config: &ScannerConfig) -> Self {
        let browser: Arc<dyn BrowserProvider> = Arc::new(ChromiumProvider::new());

        let inference: Option<Arc<dyn InferenceClient>> = match &config.hf_api_key {
            Some(key) => {
                info!(model = %config.hf_model, "AI enrichment enabled");
                Some(Arc::new(HfClient::new(
                    key.clone(),
                    config.hf_model.clone(),
                    config.hf_base_url.clone(),
                )))
            }
            None => {
                info!("no inference credential configured, using fallback suggestions");
                None
            }
        };

        let mut options = ScanOptions::default();
        options.audit.timeout = config.audit_timeout;

        let orchestrator =
            ScanOrchestrator::with_options(browser, IssueEnricher::new(inference), options);

        Self::with_orchestrator(orchestrator, config.max_concurrent_scans)
    }

    /// Assemble state around an existing orchestrator. Used by tests to
    /// substitute capability doubles.
    pub fn with_orchestrator(orchestrator: ScanOrchestrator, max_concurrent_scans: usize) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            scan_permits: Arc::new(Semaphore::new(max_concurrent_scans)),
        }
    }
}
