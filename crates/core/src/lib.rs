//! Core types for proverbia
//!
//! Domain types, the text canonicalization pipeline and confidence ranking. Nothing
//! in this crate performs I/O.

pub mod constants;
pub mod env_config;
mod error;
mod ids;
mod language;
mod pair;
mod ranking;
mod review;
mod saying;
mod settings;
mod suggestion;
pub mod text;
mod vote;

pub use error::*;
pub use ids::*;
pub use language::*;
pub use pair::*;
pub use ranking::*;
pub use review::*;
pub use saying::*;
pub use settings::*;
pub use suggestion::*;
pub use text::{display_text, normalize, normalize_whitespace, slugify};
pub use vote::*;
