use async_trait::async_trait;
use proverbia_core::{Language, LanguageId};

use crate::error::StorageError;

/// Language registry.
#[async_trait]
pub trait LanguageStore: Send + Sync {
    /// Insert a language. `code` must already be normalized and validated.
    async fn create_language(&self, code: &str, name: &str) -> Result<Language, StorageError>;

    async fn get_language(&self, id: LanguageId) -> Result<Option<Language>, StorageError>;

    async fn find_language_by_code(&self, code: &str) -> Result<Option<Language>, StorageError>;

    /// All languages ordered by code.
    async fn list_languages(&self) -> Result<Vec<Language>, StorageError>;
}
