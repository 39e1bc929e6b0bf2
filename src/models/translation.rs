//! Normalized translation result types.
//!
//! Field names match the canonical response schema in [`crate::schema`].
//! Only `detected_language` and `translations.{primary, alternatives}` are
//! required; everything else may be absent and stays absent when the
//! result is serialized again.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// Structured output of a single translation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Language code of the source text, e.g. `en`.
    pub detected_language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_language_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language_name: Option<String>,
    /// Model confidence as a percentage string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_detected: Option<String>,
    /// `word`, `sentence` or `paragraph`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,

    pub translations: Translations,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<Synonym>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<Antonym>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<Improvement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar_check: Option<GrammarCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<Definition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Pronunciation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_words: Option<Vec<String>>,
    /// `beginner`, `intermediate` or `advanced`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    /// `common`, `moderate` or `rare`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_frequency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    pub primary: String,
    /// Ordered by presentation preference.
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casual_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Antonym {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub better_than_original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarCheck {
    #[serde(default)]
    pub has_errors: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GrammarError>>,
}

impl GrammarCheck {
    pub fn errors(&self) -> &[GrammarError] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// `false` when errors are listed although `has_errors` says there are none.
    pub fn is_consistent(&self) -> bool {
        self.has_errors || self.errors().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarError {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meanings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_guide: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_result_round_trip() {
        let raw = r#"{"detected_language":"en","translations":{"primary":"hola","alternatives":[]}}"#;
        let result: TranslationResult = serde_json::from_str(raw).unwrap();
        assert!(result.synonyms.is_none());

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, raw);
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let result: TranslationResult = serde_json::from_str(
            r#"{"detected_language":"en","translations":{"primary":"hola","alternatives":["buenas"]},
                "synonyms":null,"pronunciation":{"ipa":"ˈo.la"}}"#,
        )
        .unwrap();
        assert!(result.synonyms.is_none());
        assert_eq!(
            result.pronunciation.and_then(|p| p.ipa).as_deref(),
            Some("ˈo.la")
        );
    }

    #[test]
    fn test_grammar_check_consistency() {
        let check = GrammarCheck {
            has_errors: false,
            errors: Some(vec![GrammarError {
                kind: Some("spelling".to_string()),
                original: Some("teh".to_string()),
                corrected: Some("the".to_string()),
                explanation: None,
            }]),
        };
        assert!(!check.is_consistent());
        assert_eq!(check.errors().len(), 1);

        let clean = GrammarCheck { has_errors: false, errors: None };
        assert!(clean.is_consistent());
        assert!(clean.errors().is_empty());
    }
}
