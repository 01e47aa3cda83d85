use std::sync::Arc;

use proverbia_core::constants::{MAX_QUERY_LIMIT, MIN_SEARCH_TERM_CHARS};
use proverbia_core::{
    Language, NewSaying, Saying, SayingId, Settings, known_language_name, normalize,
    validate_language_code,
};
use proverbia_storage::StorageBackend;
use proverbia_storage::traits::{LanguageStore, SayingStore};

use crate::ServiceError;

pub struct SayingService {
    storage: Arc<StorageBackend>,
    settings: Arc<Settings>,
}

impl SayingService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>, settings: Arc<Settings>) -> Self {
        Self { storage, settings }
    }

    /// Register a language. Without an explicit name the built-in display name
    /// is used, falling back to the code itself.
    pub async fn create_language(
        &self,
        code: &str,
        name: Option<&str>,
    ) -> Result<Language, ServiceError> {
        let code = validate_language_code(code)?;
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_owned(),
            None => known_language_name(&code).unwrap_or(code.as_str()).to_owned(),
        };
        let language = self.storage.create_language(&code, &name).await?;
        tracing::info!(code = %language.code, id = %language.id, "Language registered");
        Ok(language)
    }

    /// Resolve a language by code. Unknown codes are `NotFound`.
    pub async fn find_language(&self, code: &str) -> Result<Language, ServiceError> {
        language_by_code(&self.storage, code).await
    }

    pub async fn list_languages(&self) -> Result<Vec<Language>, ServiceError> {
        Ok(self.storage.list_languages().await?)
    }

    /// Store a new saying. A saying whose canonical form already exists in the
    /// language is rejected, so canonical lookups stay unambiguous.
    pub async fn create_saying(
        &self,
        language_code: &str,
        text: &str,
    ) -> Result<Saying, ServiceError> {
        let language = self.find_language(language_code).await?;
        let new = NewSaying::new(language.id, text, self.settings.display_case)?;
        if let Some(existing) =
            self.storage.find_by_canonical(language.id, new.canonical_text()).await?
        {
            return Err(ServiceError::DuplicateSaying(existing.raw_text));
        }
        match self.storage.insert_saying(&new).await {
            Ok(saying) => {
                tracing::debug!(id = %saying.id, language = %language.code, "Saying created");
                Ok(saying)
            },
            Err(e) if e.is_duplicate() => {
                Err(ServiceError::DuplicateSaying(new.raw_text().to_owned()))
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Return the saying with the same canonical form, creating it if absent.
    pub async fn find_or_create_saying(
        &self,
        language_code: &str,
        text: &str,
    ) -> Result<Saying, ServiceError> {
        let language = self.find_language(language_code).await?;
        let new = NewSaying::new(language.id, text, self.settings.display_case)?;
        if let Some(existing) =
            self.storage.find_by_canonical(language.id, new.canonical_text()).await?
        {
            return Ok(existing);
        }
        match self.storage.insert_saying(&new).await {
            Ok(saying) => Ok(saying),
            // Lost a race with a concurrent insert of the same text.
            Err(e) if e.is_duplicate() => self
                .storage
                .find_by_canonical(language.id, new.canonical_text())
                .await?
                .ok_or_else(|| ServiceError::not_found("saying", new.canonical_text())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_saying(&self, id: SayingId) -> Result<Saying, ServiceError> {
        self.storage.get_saying(id).await?.ok_or_else(|| ServiceError::not_found("saying", id))
    }

    /// Look a saying up by slug, preferring one in the default source language.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Saying, ServiceError> {
        let candidates = self.storage.find_by_slug(slug.trim()).await?;
        let preferred = match self
            .storage
            .find_language_by_code(&self.settings.default_source_language)
            .await?
        {
            Some(source) => candidates.iter().position(|s| s.language_id == source.id),
            None => None,
        };
        let index = preferred.unwrap_or(0);
        candidates
            .into_iter()
            .nth(index)
            .ok_or_else(|| ServiceError::not_found("saying", slug))
    }

    /// Exact lookup: `text` is normalized before comparison.
    pub async fn find_exact(
        &self,
        language_code: &str,
        text: &str,
    ) -> Result<Option<Saying>, ServiceError> {
        let language = self.find_language(language_code).await?;
        let canonical = normalize(text);
        if canonical.is_empty() {
            return Ok(None);
        }
        Ok(self.storage.find_by_canonical(language.id, &canonical).await?)
    }

    /// Substring search over canonical text, prefix matches first.
    ///
    /// Queries shorter than two canonical characters match nothing.
    pub async fn search(
        &self,
        language_code: Option<&str>,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Saying>, ServiceError> {
        let canonical = normalize(query);
        if canonical.chars().count() < MIN_SEARCH_TERM_CHARS {
            return Ok(Vec::new());
        }
        let language_id = match language_code {
            Some(code) => Some(self.find_language(code).await?.id),
            None => None,
        };
        let limit = limit.unwrap_or(self.settings.search_limit).min(MAX_QUERY_LIMIT);
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(self.storage.search_sayings(language_id, &canonical, limit).await?)
    }

    /// Delete a saying; its pairs and their votes go with it.
    pub async fn delete_saying(&self, id: SayingId) -> Result<(), ServiceError> {
        if self.storage.delete_saying(id).await? {
            tracing::info!(%id, "Saying deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("saying", id))
        }
    }
}

pub(crate) async fn language_by_code(
    storage: &StorageBackend,
    code: &str,
) -> Result<Language, ServiceError> {
    let code = validate_language_code(code)?;
    storage
        .find_language_by_code(&code)
        .await?
        .ok_or_else(|| ServiceError::not_found("language", &code))
}
