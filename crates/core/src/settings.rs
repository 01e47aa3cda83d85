//! Process-wide settings resolved once at startup.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEARCH_LIMIT, MAX_QUERY_LIMIT, MAX_REVIEW_BATCH_SIZE, REVIEW_BATCH_SIZE};
use crate::env_config::{env_parse_with_default, env_string_with_default};
use crate::language::normalize_language_code;

/// How a saying's display text is cased when it is stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCase {
    /// Keep the submitter's casing.
    #[default]
    Preserve,
    /// Lowercase the display text as well as the canonical text.
    Lowercase,
}

impl DisplayCase {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Preserve => "preserve",
            Self::Lowercase => "lowercase",
        }
    }
}

impl std::fmt::Display for DisplayCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DisplayCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "lowercase" | "lower" => Ok(Self::Lowercase),
            other => Err(format!("unknown display case policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Language whose sayings are shown first when a pair is presented.
    pub default_source_language: String,
    pub default_target_language: String,
    pub review_batch_size: usize,
    pub search_limit: usize,
    pub display_case: DisplayCase,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_source_language: "en".to_owned(),
            default_target_language: "fa".to_owned(),
            review_batch_size: REVIEW_BATCH_SIZE,
            search_limit: DEFAULT_SEARCH_LIMIT,
            display_case: DisplayCase::Preserve,
        }
    }
}

impl Settings {
    /// Build settings from `PROVERBIA_*` environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let review_batch_size =
            env_parse_with_default("PROVERBIA_REVIEW_BATCH_SIZE", defaults.review_batch_size);
        let search_limit = env_parse_with_default("PROVERBIA_SEARCH_LIMIT", defaults.search_limit);
        Self {
            default_source_language: normalize_language_code(&env_string_with_default(
                "PROVERBIA_DEFAULT_SOURCE_LANGUAGE",
                &defaults.default_source_language,
            )),
            default_target_language: normalize_language_code(&env_string_with_default(
                "PROVERBIA_DEFAULT_TARGET_LANGUAGE",
                &defaults.default_target_language,
            )),
            review_batch_size: review_batch_size.min(MAX_REVIEW_BATCH_SIZE),
            search_limit: search_limit.clamp(1, MAX_QUERY_LIMIT),
            display_case: env_parse_with_default("PROVERBIA_DISPLAY_CASE", defaults.display_case),
        }
    }
}
