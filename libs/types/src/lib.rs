//! Types library for the accessibility scan service
//!
//! This library provides all core type definitions shared between the scan
//! pipeline and the HTTP surface, ensuring a single wire format for findings
//! and a single error taxonomy across the service.
//!
//! # Modules
//! - `ids`: Unique identifiers (ScanId)
//! - `finding`: Raw audit findings as reported by the audit engine
//! - `severity`: Severity tiers assigned to findings
//! - `report`: Enriched findings and the scan report envelope
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod finding;
pub mod ids;
pub mod report;
pub mod severity;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::finding::*;
    pub use crate::ids::*;
    pub use crate::report::*;
    pub use crate::severity::*;
}
