//! Issue enrichment
//!
//! Fans out one suggestion attempt per finding, joins them in input order,
//! and absorbs every per-finding inference failure with the deterministic
//! fallback. Each task reads one finding and writes one independent output
//! slot, so no locking is involved.

use std::sync::Arc;

use tracing::debug;

use types::finding::Finding;
use types::report::EnrichedFinding;

use crate::capabilities::inference::{CompletionOptions, InferenceClient};
use crate::pipeline::classifier::classify;
use crate::pipeline::fallback::fallback_suggestion;

/// Enriches raw findings with a severity tier and a remediation suggestion.
pub struct IssueEnricher {
    inference: Option<Arc<dyn InferenceClient>>,
    options: CompletionOptions,
}

impl IssueEnricher {
    /// Build an enricher. `None` means no inference endpoint is configured
    /// and every suggestion comes from the fallback generator.
    pub fn new(inference: Option<Arc<dyn InferenceClient>>) -> Self {
        Self {
            inference,
            options: CompletionOptions::default(),
        }
    }

    /// Override the generation settings used per completion call.
    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    /// Enrich a batch of findings concurrently.
    ///
    /// The output is index-aligned with the input: same length, same order,
    /// one enriched finding per raw finding. No single finding's failure can
    /// abort the batch.
    pub async fn enrich(&self, findings: Vec<Finding>) -> Vec<EnrichedFinding> {
        let tasks = findings.into_iter().map(|finding| self.enrich_one(finding));
        futures::future::join_all(tasks).await
    }

    async fn enrich_one(&self, finding: Finding) -> EnrichedFinding {
        let severity = classify(&finding.kind);
        let suggestion = self.suggest(&finding).await;
        EnrichedFinding {
            finding,
            severity,
            suggestion,
        }
    }

    async fn suggest(&self, finding: &Finding) -> String {
        let client = match &self.inference {
            Some(client) => client,
            None => return fallback_suggestion(finding),
        };

        let prompt = build_prompt(finding);
        match client.complete(&prompt, &self.options).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    fallback_suggestion(finding)
                } else {
                    text.to_string()
                }
            }
            Err(err) => {
                debug!(code = %finding.code, error = %err, "enrichment degraded to fallback");
                fallback_suggestion(finding)
            }
        }
    }
}

/// Remediation prompt for one finding.
fn build_prompt(finding: &Finding) -> String {
    format!(
        "You are an accessibility expert.\n\
         Provide a short actionable fix:\n\n\
         Issue: {}\n\
         Element: {}\n\
         Code: {}\n\n\
         Give only the fix in 1-2 sentences.",
        finding.message,
        finding.selector_or_placeholder(),
        finding.code
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use types::errors::InferenceError;
    use types::severity::Severity;

    fn finding(kind: &str, code: &str, message: &str) -> Finding {
        Finding {
            kind: kind.to_string(),
            code: code.to_string(),
            message: message.to_string(),
            selector: Some(format!("html > body > #{code}")),
            context: None,
        }
    }

    /// Double that succeeds or fails per call depending on the rule code
    /// embedded in the prompt, and counts every invocation.
    struct ScriptedInference {
        failing_code: Option<String>,
        reply: String,
        calls: AtomicUsize,
    }

    impl ScriptedInference {
        fn replying(reply: &str) -> Self {
            Self {
                failing_code: None,
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing_for(code: &str, reply: &str) -> Self {
            Self {
                failing_code: Some(code.to_string()),
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl InferenceClient for ScriptedInference {
        async fn complete(
            &self,
            prompt: &str,
            _options: &CompletionOptions,
        ) -> Result<String, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(code) = &self.failing_code {
                if prompt.contains(&format!("Code: {code}")) {
                    return Err(InferenceError::Http("connection reset".into()));
                }
            }
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_unconfigured_enricher_uses_fallback_elementwise() {
        let enricher = IssueEnricher::new(None);
        let findings = vec![
            finding("error", "image-alt", "Image is missing alt attribute"),
            finding("warning", "heading-order", "Heading levels skip"),
            finding("notice", "landmark-main", "No main landmark"),
        ];
        let expected: Vec<String> = findings.iter().map(fallback_suggestion).collect();

        let enriched = enricher.enrich(findings).await;

        assert_eq!(enriched.len(), 3);
        for (issue, expected) in enriched.iter().zip(expected) {
            assert_eq!(issue.suggestion, expected);
        }
        assert_eq!(enriched[0].severity, Severity::Critical);
        assert_eq!(enriched[1].severity, Severity::Moderate);
        assert_eq!(enriched[2].severity, Severity::Minor);
    }

    #[tokio::test]
    async fn test_ai_suggestion_is_trimmed() {
        let client = Arc::new(ScriptedInference::replying("  Add alt text to the image.  "));
        let enricher = IssueEnricher::new(Some(client.clone()));

        let enriched = enricher
            .enrich(vec![finding("error", "image-alt", "Image is missing alt attribute")])
            .await;

        assert_eq!(enriched[0].suggestion, "Add alt text to the image.");
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_whitespace_only_reply_degrades_to_fallback() {
        let client = Arc::new(ScriptedInference::replying("   \n  "));
        let enricher = IssueEnricher::new(Some(client));

        let enriched = enricher
            .enrich(vec![finding("error", "image-alt", "Image is missing alt attribute")])
            .await;

        assert_eq!(enriched[0].suggestion, "Add descriptive alt text.");
    }

    #[tokio::test]
    async fn test_partial_failure_degrades_only_the_failing_finding() {
        let client = Arc::new(ScriptedInference::failing_for("form-label", "AI fix."));
        let enricher = IssueEnricher::new(Some(client.clone()));

        let findings = vec![
            finding("error", "image-alt", "Image is missing alt attribute"),
            finding("error", "form-label", "Form input has no associated label"),
            finding("error", "link-name", "Link has no discernible link text"),
        ];
        let enriched = enricher.enrich(findings).await;

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].suggestion, "AI fix.");
        assert_eq!(enriched[1].suggestion, "Add proper label for form input.");
        assert_eq!(enriched[2].suggestion, "AI fix.");
        // One attempt per finding, no retries.
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_output_is_index_aligned_with_input() {
        let client = Arc::new(ScriptedInference::replying("AI fix."));
        let enricher = IssueEnricher::new(Some(client));

        let findings: Vec<Finding> = (0..8)
            .map(|i| finding("error", &format!("rule-{i}"), &format!("violation {i}")))
            .collect();
        let enriched = enricher.enrich(findings.clone()).await;

        assert_eq!(enriched.len(), findings.len());
        for (raw, issue) in findings.iter().zip(&enriched) {
            assert_eq!(&issue.finding, raw);
            assert!(!issue.suggestion.is_empty());
        }
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let enricher = IssueEnricher::new(None);
        let enriched = enricher.enrich(vec![]).await;
        assert!(enriched.is_empty());
    }

    #[test]
    fn test_prompt_uses_placeholder_for_missing_selector() {
        let mut f = finding("error", "image-alt", "Image is missing alt attribute");
        f.selector = None;
        let prompt = build_prompt(&f);
        assert!(prompt.contains("Element: N/A"));
        assert!(prompt.contains("Code: image-alt"));
        assert!(prompt.contains("Issue: Image is missing alt attribute"));
    }
}
