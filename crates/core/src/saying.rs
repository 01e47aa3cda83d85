use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SAYING_CHARS, MIN_SAYING_CHARS};
use crate::error::CoreError;
use crate::ids::{LanguageId, SayingId};
use crate::settings::DisplayCase;
use crate::text::{display_text, normalize, slugify};

/// A saying as stored: display text plus its derived canonical form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Saying {
    pub id: SayingId,
    pub language_id: LanguageId,
    /// Display form, whitespace-normalized.
    pub raw_text: String,
    /// Output of [`normalize`] over `raw_text`. Never set independently.
    pub canonical_text: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a saying.
///
/// Construction is the only place canonical text and slug are derived, so a
/// `NewSaying` can never carry a canonical form that disagrees with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSaying {
    language_id: LanguageId,
    raw_text: String,
    canonical_text: String,
    slug: String,
}

impl NewSaying {
    pub fn new(language_id: LanguageId, text: &str, case: DisplayCase) -> Result<Self, CoreError> {
        let raw_text = display_text(text, case);
        validate_length(&raw_text)?;
        let canonical_text = normalize(&raw_text);
        if canonical_text.is_empty() {
            return Err(CoreError::InvalidInput(format!(
                "saying {raw_text:?} has no text left after normalization"
            )));
        }
        let slug = slugify(&canonical_text);
        Ok(Self { language_id, raw_text, canonical_text, slug })
    }

    #[must_use]
    pub const fn language_id(&self) -> LanguageId {
        self.language_id
    }

    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[must_use]
    pub fn canonical_text(&self) -> &str {
        &self.canonical_text
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Check that whitespace-normalized text is within the saying length bounds.
pub fn validate_length(text: &str) -> Result<(), CoreError> {
    let chars = text.chars().count();
    if chars < MIN_SAYING_CHARS {
        return Err(CoreError::InvalidInput("saying text is empty".to_owned()));
    }
    if chars > MAX_SAYING_CHARS {
        return Err(CoreError::InvalidInput(format!(
            "saying text is {chars} characters, maximum is {MAX_SAYING_CHARS}"
        )));
    }
    Ok(())
}
