//! Storage backend trait abstraction
//!
//! Async domain traits implemented by both the SQLite and PostgreSQL backends.
//! Services depend on these traits, never on a concrete database.

pub mod language;
pub mod pair;
pub mod saying;
pub mod suggestion;
pub mod vote;

pub use language::LanguageStore;
pub use pair::PairStore;
pub use saying::SayingStore;
pub use suggestion::SuggestionStore;
pub use vote::VoteStore;
