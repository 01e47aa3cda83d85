use anyhow::Result;
use proverbia_core::{SuggestionId, UserId};

use crate::{App, print_json};

pub(crate) async fn run_suggest(
    app: &App,
    user: UserId,
    source_language: &str,
    target_language: &str,
    source_text: &str,
    target_text: &str,
) -> Result<()> {
    let suggestion = app
        .suggestions
        .suggest(user, source_language, target_language, source_text, target_text)
        .await?;
    print_json(&suggestion)
}

pub(crate) async fn run_list(app: &App, limit: usize) -> Result<()> {
    print_json(&app.suggestions.list_pending(limit).await?)
}

pub(crate) async fn run_approve(app: &App, id: SuggestionId) -> Result<()> {
    print_json(&app.suggestions.approve(id).await?)
}

pub(crate) async fn run_reject(app: &App, id: SuggestionId) -> Result<()> {
    print_json(&app.suggestions.reject(id).await?)
}
