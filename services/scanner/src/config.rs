//! Service configuration
//!
//! Read once from the environment at startup. Unset or unparseable values
//! fall back to defaults with a warning rather than aborting startup.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::capabilities::inference::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Configuration for the scan service.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Inference credential; `None` disables AI enrichment entirely.
    pub hf_api_key: Option<String>,
    /// Chat-completions model id.
    pub hf_model: String,
    /// Chat-completions endpoint base.
    pub hf_base_url: String,
    /// Bound on navigation plus audit execution per scan.
    pub audit_timeout: Duration,
    /// Cap on scans in flight; each scan owns one browser process.
    pub max_concurrent_scans: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            hf_api_key: None,
            hf_model: DEFAULT_MODEL.to_string(),
            hf_base_url: DEFAULT_BASE_URL.to_string(),
            audit_timeout: Duration::from_secs(20),
            max_concurrent_scans: 2,
        }
    }
}

impl ScannerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", defaults.port),
            hf_api_key: non_empty_var("HF_API_KEY"),
            hf_model: non_empty_var("HF_MODEL").unwrap_or(defaults.hf_model),
            hf_base_url: non_empty_var("HF_BASE_URL").unwrap_or(defaults.hf_base_url),
            audit_timeout: Duration::from_secs(parse_or(
                "SCAN_TIMEOUT_SECS",
                defaults.audit_timeout.as_secs(),
            )),
            max_concurrent_scans: parse_or("MAX_CONCURRENT_SCANS", defaults.max_concurrent_scans),
        }
    }
}

/// Read a variable, treating the empty string as absent.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Parse a variable, falling back to `default` on absence or parse failure.
fn parse_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match non_empty_var(name) {
        Some(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(var = name, value = %value, "unparseable value, using default");
                default
            }
        },
        None => default,
    }
}
