//! Test utilities and module declarations for storage tests.

use crate::Storage;
use proverbia_core::{DisplayCase, Language, NewSaying, PairKey, Saying, TranslationPair};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_language(storage: &Storage, code: &str) -> Language {
    storage.create_language(code, &format!("Language {code}")).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_saying(storage: &Storage, language: &Language, text: &str) -> Saying {
    let new = NewSaying::new(language.id, text, DisplayCase::Preserve).unwrap();
    storage.insert_saying(&new).unwrap()
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn link(storage: &Storage, a: &Saying, b: &Saying) -> TranslationPair {
    storage.insert_pair(PairKey::new(a.id, b.id).unwrap()).unwrap()
}

mod language_tests;
mod pair_tests;
