//! Accessibility Scan Service
//!
//! Audits a web page for accessibility violations and returns a prioritized
//! issue list enriched with remediation guidance:
//! - Headless-browser audit via an embedded ruleset (CDP)
//! - Severity classification of raw findings
//! - Concurrent per-issue AI remediation with deterministic fallback
//! - Stateless HTTP surface, one scan per request
//!
//! # Architecture
//!
//! ```text
//!      GET /api/test?url=…
//!            │
//!       ┌────▼─────┐
//!       │ Handler  │  ← validates input, bounds concurrency
//!       └────┬─────┘
//!            │
//!     ┌──────▼────────┐
//!     │ Orchestrator  │  ← acquire browser, audit, release exactly once
//!     └──────┬────────┘
//!            │ raw findings
//!     ┌──────▼────────┐
//!     │   Enricher    │  ← classify + fan-out AI suggestions, join in order
//!     └──────┬────────┘
//!            │
//!     {issues, summary}
//! ```

pub mod capabilities;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pipeline;
pub mod router;
pub mod state;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
