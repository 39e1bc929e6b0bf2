// Supported target languages
// Author: kelexine (https://github.com/kelexine)

use serde::Serialize;

/// A language offered as a translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

static LANGUAGES: phf::OrderedMap<&'static str, Language> = phf::phf_ordered_map! {
    "en" => Language { code: "en", name: "English", flag: "🇺🇸" },
    "es" => Language { code: "es", name: "Spanish", flag: "🇪🇸" },
    "fr" => Language { code: "fr", name: "French", flag: "🇫🇷" },
    "de" => Language { code: "de", name: "German", flag: "🇩🇪" },
    "it" => Language { code: "it", name: "Italian", flag: "🇮🇹" },
    "pt" => Language { code: "pt", name: "Portuguese", flag: "🇵🇹" },
    "bn" => Language { code: "bn", name: "Bengali", flag: "🇧🇩" },
    "hi" => Language { code: "hi", name: "Hindi", flag: "🇮🇳" },
    "zh" => Language { code: "zh", name: "Chinese", flag: "🇨🇳" },
    "ja" => Language { code: "ja", name: "Japanese", flag: "🇯🇵" },
    "ko" => Language { code: "ko", name: "Korean", flag: "🇰🇷" },
    "ru" => Language { code: "ru", name: "Russian", flag: "🇷🇺" },
    "ar" => Language { code: "ar", name: "Arabic", flag: "🇸🇦" },
    "tr" => Language { code: "tr", name: "Turkish", flag: "🇹🇷" },
    "nl" => Language { code: "nl", name: "Dutch", flag: "🇳🇱" },
    "pl" => Language { code: "pl", name: "Polish", flag: "🇵🇱" },
    "sv" => Language { code: "sv", name: "Swedish", flag: "🇸🇪" },
};

/// Look up a language by code. Case-insensitive.
pub fn lookup(code: &str) -> Option<&'static Language> {
    LANGUAGES.get(code.trim().to_ascii_lowercase().as_str())
}

/// All supported languages in display order.
pub fn all() -> impl Iterator<Item = &'static Language> {
    LANGUAGES.values()
}

/// Display name for `code`, falling back to the code itself.
pub fn display_name(code: &str) -> &str {
    lookup(code).map(|l| l.name).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("es").unwrap().name, "Spanish");
        assert_eq!(lookup(" JA ").unwrap().code, "ja");
        assert!(lookup("xx").is_none());
    }

    #[test]
    fn test_display_order_starts_with_english() {
        let codes: Vec<_> = all().map(|l| l.code).collect();
        assert_eq!(codes.first(), Some(&"en"));
        assert_eq!(codes.len(), 17);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("bn"), "Bengali");
        assert_eq!(display_name("tlh"), "tlh");
    }
}
