//! Deterministic fallback suggestions
//!
//! Keyword-priority remediation text used whenever AI enrichment is
//! unavailable or fails. An ordered list of (patterns, remediation) pairs,
//! evaluated in sequence over the lower-cased message; first match wins.

use types::finding::Finding;

/// Ordered keyword rules. Order matters: earlier rules shadow later ones.
const FALLBACK_RULES: &[(&[&str], &str)] = &[
    (&["alt", "image"], "Add descriptive alt text."),
    (&["contrast"], "Increase color contrast to meet WCAG."),
    (&["heading"], "Use logical heading hierarchy."),
    (&["label", "form"], "Add proper label for form input."),
    (&["link"], "Provide descriptive link text."),
    (&["aria"], "Ensure ARIA attributes are valid."),
    (&["landmark"], "Use semantic HTML5 landmarks."),
];

const GENERIC_REMEDIATION: &str = "Review WCAG guidelines.";

/// Derive a remediation suggestion from the finding's message alone.
///
/// Total and deterministic: always returns a non-empty string.
pub fn fallback_suggestion(finding: &Finding) -> String {
    let message = finding.message.to_lowercase();
    for (keywords, remediation) in FALLBACK_RULES {
        if keywords.iter().any(|keyword| message.contains(keyword)) {
            return (*remediation).to_string();
        }
    }
    GENERIC_REMEDIATION.to_string()
}
