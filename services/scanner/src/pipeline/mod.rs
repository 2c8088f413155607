//! The scan-and-enrich pipeline
//!
//! Raw findings flow classifier → enricher under the orchestrator, which
//! owns the browser session for the duration of one scan.

pub mod classifier;
pub mod enrich;
pub mod fallback;
pub mod scan;

pub use classifier::classify;
pub use enrich::IssueEnricher;
pub use fallback::fallback_suggestion;
pub use scan::{ScanOptions, ScanOrchestrator};
