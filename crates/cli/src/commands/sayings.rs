use anyhow::Result;
use proverbia_core::{SayingId, normalize, slugify};
use serde_json::json;

use crate::{App, print_json};

pub(crate) fn run_normalize(text: &str) -> Result<()> {
    let canonical = normalize(text);
    let slug = slugify(&canonical);
    print_json(&json!({ "text": text, "canonical": canonical, "slug": slug }))
}

pub(crate) async fn run_add_language(app: &App, code: &str, name: Option<&str>) -> Result<()> {
    let language = app.sayings.create_language(code, name).await?;
    print_json(&language)
}

pub(crate) async fn run_languages(app: &App) -> Result<()> {
    print_json(&app.sayings.list_languages().await?)
}

pub(crate) async fn run_add_saying(app: &App, language: &str, text: &str) -> Result<()> {
    let saying = app.sayings.create_saying(language, text).await?;
    print_json(&saying)
}

pub(crate) async fn run_find(app: &App, language: &str, text: &str) -> Result<()> {
    match app.sayings.find_exact(language, text).await? {
        Some(saying) => print_json(&saying),
        None => anyhow::bail!("No saying matches {text:?} in {language}"),
    }
}

pub(crate) async fn run_show(app: &App, slug: &str) -> Result<()> {
    print_json(&app.sayings.find_by_slug(slug).await?)
}

pub(crate) async fn run_search(
    app: &App,
    query: &str,
    language: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let results = app.sayings.search(language, query, limit).await?;
    print_json(&results)
}

pub(crate) async fn run_delete(app: &App, id: SayingId) -> Result<()> {
    app.sayings.delete_saying(id).await?;
    print_json(&json!({ "deleted": id }))
}
