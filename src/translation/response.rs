// Response normalization (Gemini text → TranslationResult)
// Author: kelexine (https://github.com/kelexine)

use crate::error::{Result, TranslateError};
use crate::models::translation::TranslationResult;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

/// Lazily initialized regex for a Markdown code fence around the payload
static CODE_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get or initialize the code fence regex
fn get_code_fence_regex() -> &'static Regex {
    CODE_FENCE_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^\s*(?:```(?i:json)?[ \t]*\r?\n?)?(.*?)(?:\r?\n?[ \t]*```)?\s*$")
            .expect("Invalid regex pattern")
    })
}

/// Remove a leading and/or trailing code fence (optionally tagged `json`).
pub fn strip_code_fence(raw: &str) -> &str {
    get_code_fence_regex()
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| raw.trim())
}

/// Parse the model's textual reply into a [`TranslationResult`].
///
/// Fails with `EmptyResponse` when there is no text and with
/// `MalformedResponse` (carrying the original text) when it does not parse.
pub fn normalize(raw: Option<&str>) -> Result<TranslationResult> {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Err(TranslateError::EmptyResponse),
    };

    let cleaned = strip_code_fence(raw);
    debug!(
        "Normalizing response ({} chars, {} after cleanup)",
        raw.len(),
        cleaned.len()
    );

    let result: TranslationResult = serde_json::from_str(cleaned).map_err(|e| {
        error!("Failed to parse translation response: {}", e);
        debug!("Raw response: {}", raw);
        TranslateError::MalformedResponse {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
    })?;

    if let Some(check) = &result.grammar_check {
        if !check.is_consistent() {
            warn!(
                "grammar_check reports no errors but lists {}, keeping them",
                check.errors().len()
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tagged_fence() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fence(raw), "{\"a\":1}");
    }

    #[test]
    fn test_strip_untagged_and_uppercase_fence() {
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```JSON\n{}\n```"), "{}");
    }

    #[test]
    fn test_strip_one_sided_fence() {
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
        assert_eq!(strip_code_fence("{}\n```"), "{}");
    }

    #[test]
    fn test_bare_json_untouched() {
        assert_eq!(strip_code_fence("  {\"a\":\"`x`\"}  "), "{\"a\":\"`x`\"}");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(matches!(normalize(Some(" \n ")), Err(TranslateError::EmptyResponse)));
        assert!(matches!(normalize(None), Err(TranslateError::EmptyResponse)));
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let err = normalize(Some(r#"{"translations":{"primary":"x","alternatives":[]}}"#))
            .unwrap_err();
        assert!(matches!(err, TranslateError::MalformedResponse { .. }));
    }

    #[test]
    fn test_inconsistent_grammar_check_is_tolerated() {
        let raw = r#"{"detected_language":"en","translations":{"primary":"hola","alternatives":[]},
            "grammar_check":{"has_errors":false,"errors":[{"type":"spelling","original":"helo","corrected":"hello","explanation":"typo"}]}}"#;
        let result = normalize(Some(raw)).unwrap();
        let check = result.grammar_check.unwrap();
        assert!(!check.has_errors);
        assert_eq!(check.errors().len(), 1);
    }
}
