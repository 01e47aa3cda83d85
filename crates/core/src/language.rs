use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::LanguageId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub id: LanguageId,
    /// Lowercase ASCII code, unique (`en`, `fa`, ...).
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Display names for the languages the site ships with.
const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Farsi"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("tr", "Turkish"),
];

/// Trim, lowercase and drop any embedded whitespace from a language code.
#[must_use]
pub fn normalize_language_code(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}

/// Normalize `code` and check it is a non-empty run of `a-z`.
pub fn validate_language_code(code: &str) -> Result<String, CoreError> {
    let normalized = normalize_language_code(code);
    if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CoreError::InvalidInput(format!(
            "language code must be lowercase ASCII letters, got {code:?}"
        )));
    }
    Ok(normalized)
}

/// Display name for a known language code.
#[must_use]
pub fn known_language_name(code: &str) -> Option<&'static str> {
    let code = normalize_language_code(code);
    KNOWN_LANGUAGES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_normalized_before_validation() {
        assert_eq!(validate_language_code(" E N "), Ok("en".to_owned()));
        assert_eq!(validate_language_code("FA"), Ok("fa".to_owned()));
    }

    #[test]
    fn rejects_non_letter_codes() {
        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("en-us").is_err());
        assert!(validate_language_code("e1").is_err());
        assert!(validate_language_code("فا").is_err());
    }

    #[test]
    fn known_names() {
        assert_eq!(known_language_name("EN"), Some("English"));
        assert_eq!(known_language_name("fa"), Some("Farsi"));
        assert_eq!(known_language_name("xx"), None);
    }
}
