//! Service layer for proverbia
//!
//! Business rules between the CLI and storage: canonical lookup, pair
//! registration, vote toggling, confidence ranking and review sampling.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::manual_let_else, reason = "if let is clearer")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::cognitive_complexity, reason = "Complex async flows are inherent")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod pair_service;
mod ranking_service;
mod review_service;
mod saying_service;
mod suggestion_service;
mod vote_service;

#[cfg(test)]
mod tests;

pub use error::ServiceError;
pub use pair_service::{PairService, ResolvedPair};
pub use ranking_service::{RankedTranslation, RankingService};
pub use review_service::ReviewService;
pub use saying_service::SayingService;
pub use suggestion_service::{ApprovedSuggestion, SuggestionService};
pub use vote_service::VoteService;
