use anyhow::Result;
use proverbia_core::{PairId, SayingId, UserId};
use serde_json::json;

use crate::{App, print_json};

pub(crate) async fn run_link(app: &App, a: SayingId, b: SayingId) -> Result<()> {
    let pair = app.pairs.register_pair(a, b).await?;
    print_json(&app.pairs.get_pair(pair.id).await?)
}

/// Prints the new vote together with the pair's updated counts.
pub(crate) async fn run_vote(app: &App, user: UserId, pair: PairId, value: i64) -> Result<()> {
    let vote = app.votes.cast_vote(user, pair, value).await?;
    let tally = app.votes.tally(pair).await?;
    print_json(&json!({
        "vote": vote,
        "upvotes": tally.upvotes,
        "downvotes": tally.downvotes,
        "user_value": vote.value,
    }))
}

pub(crate) async fn run_tally(app: &App, pair: PairId) -> Result<()> {
    let tally = app.votes.tally(pair).await?;
    print_json(&json!({
        "pair_id": pair,
        "upvotes": tally.upvotes,
        "downvotes": tally.downvotes,
        "confidence": tally.confidence(),
    }))
}

pub(crate) async fn run_equivalents(
    app: &App,
    saying: SayingId,
    language: Option<&str>,
) -> Result<()> {
    let language = language.unwrap_or(&app.settings.default_target_language);
    print_json(&app.ranking.equivalents_of(saying, language).await?)
}

pub(crate) async fn run_translations(app: &App, saying: SayingId) -> Result<()> {
    print_json(&app.ranking.translations_for(saying).await?)
}

pub(crate) async fn run_review(
    app: &App,
    user: Option<UserId>,
    language_a: &str,
    language_b: &str,
    batch: Option<usize>,
) -> Result<()> {
    let items = app.review.sample_for_review(user, language_a, language_b, batch).await?;
    print_json(&items)
}
