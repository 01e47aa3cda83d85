//! Text canonicalization shared by storage, lookup and search.

mod normalize;
mod slug;
mod tables;


pub use normalize::{display_text, normalize, normalize_whitespace};
pub use slug::slugify;
