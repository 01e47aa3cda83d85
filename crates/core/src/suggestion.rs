//! User-submitted translation suggestions awaiting moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::ids::{LanguageId, SuggestionId, UserId};
use crate::saying::validate_length;
use crate::text::normalize_whitespace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    PendingReview,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingReview => "pending_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SuggestionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_review" => Ok(Self::PendingReview),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(CoreError::InvalidInput(format!("unknown suggestion status: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub user_id: UserId,
    pub source_language_id: LanguageId,
    pub target_language_id: LanguageId,
    pub source_text: String,
    pub target_text: String,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
}

/// Validated suggestion input. Texts are whitespace-collapsed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSuggestion {
    pub user_id: UserId,
    pub source_language_id: LanguageId,
    pub target_language_id: LanguageId,
    pub source_text: String,
    pub target_text: String,
}

impl NewSuggestion {
    pub fn new(
        user_id: UserId,
        source_language_id: LanguageId,
        target_language_id: LanguageId,
        source_text: &str,
        target_text: &str,
    ) -> Result<Self, CoreError> {
        let source_text = normalize_whitespace(source_text).to_lowercase();
        let target_text = normalize_whitespace(target_text).to_lowercase();
        validate_length(&source_text)?;
        validate_length(&target_text)?;
        Ok(Self { user_id, source_language_id, target_language_id, source_text, target_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texts_are_collapsed_and_lowercased() {
        let suggestion = NewSuggestion::new(
            UserId(1),
            LanguageId(1),
            LanguageId(2),
            "  Time   IS gold ",
            "Vaght\tTalast",
        )
        .expect("valid");
        assert_eq!(suggestion.source_text, "time is gold");
        assert_eq!(suggestion.target_text, "vaght talast");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(NewSuggestion::new(UserId(1), LanguageId(1), LanguageId(2), " ", "x").is_err());
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [SuggestionStatus::PendingReview, SuggestionStatus::Approved, SuggestionStatus::Rejected] {
            assert_eq!(status.as_str().parse::<SuggestionStatus>(), Ok(status));
        }
        assert!("archived".parse::<SuggestionStatus>().is_err());
    }
}
