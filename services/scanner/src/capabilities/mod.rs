//! External collaborator capabilities
//!
//! The pipeline talks to the outside world through three seams: browser
//! automation, the accessibility audit (reached through an acquired browser
//! session), and language-model inference. Each seam is a trait so the
//! orchestrator and enricher can be exercised against recording doubles.

pub mod audit;
pub mod browser;
pub mod chromium;
pub mod inference;

pub use audit::AuditOptions;
pub use browser::{BrowserProvider, BrowserSession, LaunchOptions};
pub use chromium::ChromiumProvider;
pub use inference::{CompletionOptions, HfClient, InferenceClient};
