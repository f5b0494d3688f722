//! Supported languages and the per-conversation language preference.

/// The language all text is normalized to before stage logic runs.
pub const CANONICAL_LANGUAGE: &str = "en";

/// Languages the assistant can hold a conversation in: (code, display name).
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("pt", "Portuguese"),
];

/// Whether a detected language code is one we can reply in.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Display name for a supported language code.
pub fn display_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// The language a conversation's candidate prefers. Starts at the canonical
/// language and changes when an utterance arrives in a different supported
/// language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePreference {
    pub code: String,
    pub name: String,
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self {
            code: CANONICAL_LANGUAGE.to_string(),
            name: "English".to_string(),
        }
    }
}

impl LanguagePreference {
    /// Build a preference for a supported code. Returns `None` for codes we
    /// cannot reply in.
    pub fn for_code(code: &str) -> Option<Self> {
        display_name(code).map(|name| Self {
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    /// Whether this preference is the canonical processing language.
    pub fn is_canonical(&self) -> bool {
        self.code == CANONICAL_LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_lookup() {
        assert!(is_supported("en"));
        assert!(is_supported("hi"));
        assert!(!is_supported("xx"));
        assert_eq!(display_name("de"), Some("German"));
        assert_eq!(display_name("xx"), None);
    }

    #[test]
    fn default_is_canonical() {
        let pref = LanguagePreference::default();
        assert!(pref.is_canonical());
        assert_eq!(pref.name, "English");
    }

    #[test]
    fn for_code_rejects_unsupported() {
        let es = LanguagePreference::for_code("es").unwrap();
        assert_eq!(es.name, "Spanish");
        assert!(!es.is_canonical());
        assert!(LanguagePreference::for_code("tlh").is_none());
    }
}
