use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use proverbia_core::{PairId, SayingId, Settings, SuggestionId, UserId};
use proverbia_service::{
    PairService, RankingService, ReviewService, SayingService, SuggestionService, VoteService,
};
use proverbia_storage::StorageBackend;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "proverbia")]
#[command(about = "Cross-language saying lookup and vote-ranked translations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form and slug of a text
    Normalize { text: String },
    AddLanguage {
        code: String,
        #[arg(short, long)]
        name: Option<String>,
    },
    Languages,
    AddSaying { language: String, text: String },
    /// Exact lookup by canonical form
    Find { language: String, text: String },
    /// Look a saying up by slug
    Show { slug: String },
    Search {
        query: String,
        #[arg(short, long)]
        language: Option<String>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    DeleteSaying { id: SayingId },
    /// Register two sayings as translations of each other
    Link { a: SayingId, b: SayingId },
    /// Cast -1, 0 or 1 on a pair; repeating a vote retracts it
    Vote {
        #[arg(short, long)]
        user: UserId,
        pair: PairId,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    Tally { pair: PairId },
    /// Ranked translations of a saying into one language, by default
    /// `PROVERBIA_DEFAULT_TARGET_LANGUAGE`
    Equivalents { saying: SayingId, language: Option<String> },
    /// Ranked translations of a saying into every language
    Translations { saying: SayingId },
    /// Random batch of pairs to review between two languages
    Review {
        language_a: String,
        language_b: String,
        #[arg(short, long)]
        user: Option<UserId>,
        #[arg(short = 'n', long)]
        batch: Option<usize>,
    },
    Suggest {
        #[arg(short, long)]
        user: UserId,
        source_language: String,
        target_language: String,
        source_text: String,
        target_text: String,
    },
    /// Pending suggestions, oldest first
    Suggestions {
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    Approve { id: SuggestionId },
    Reject { id: SuggestionId },
}

/// Services wired over one storage backend.
pub(crate) struct App {
    pub settings: Arc<Settings>,
    pub sayings: Arc<SayingService>,
    pub pairs: Arc<PairService>,
    pub votes: VoteService,
    pub ranking: RankingService,
    pub review: ReviewService,
    pub suggestions: SuggestionService,
}

impl App {
    fn new(storage: StorageBackend, settings: Settings) -> Self {
        let storage = Arc::new(storage);
        let settings = Arc::new(settings);
        let sayings = Arc::new(SayingService::new(Arc::clone(&storage), Arc::clone(&settings)));
        let pairs = Arc::new(PairService::new(Arc::clone(&storage)));
        Self {
            votes: VoteService::new(Arc::clone(&storage)),
            ranking: RankingService::new(Arc::clone(&storage)),
            review: ReviewService::new(Arc::clone(&storage), Arc::clone(&settings)),
            suggestions: SuggestionService::new(
                storage,
                Arc::clone(&sayings),
                Arc::clone(&pairs),
            ),
            sayings,
            pairs,
            settings,
        }
    }
}

pub(crate) fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("PROVERBIA_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("proverbia")
        .join("proverbia.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn open_backend() -> Result<StorageBackend> {
    #[cfg(feature = "postgres")]
    if let Ok(url) = std::env::var("DATABASE_URL") {
        tracing::info!("Using PostgreSQL backend");
        return Ok(StorageBackend::new_postgres(&url).await?);
    }
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    tracing::debug!(path = %db_path.display(), "Using SQLite backend");
    Ok(StorageBackend::new_sqlite(&db_path)?)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Normalize { text } = &cli.command {
        return commands::sayings::run_normalize(text);
    }

    let app = App::new(open_backend().await?, Settings::from_env());

    match cli.command {
        Commands::Normalize { .. } => Ok(()),
        Commands::AddLanguage { code, name } => {
            commands::sayings::run_add_language(&app, &code, name.as_deref()).await
        },
        Commands::Languages => commands::sayings::run_languages(&app).await,
        Commands::AddSaying { language, text } => {
            commands::sayings::run_add_saying(&app, &language, &text).await
        },
        Commands::Find { language, text } => {
            commands::sayings::run_find(&app, &language, &text).await
        },
        Commands::Show { slug } => commands::sayings::run_show(&app, &slug).await,
        Commands::Search { query, language, limit } => {
            commands::sayings::run_search(&app, &query, language.as_deref(), limit).await
        },
        Commands::DeleteSaying { id } => commands::sayings::run_delete(&app, id).await,
        Commands::Link { a, b } => commands::pairs::run_link(&app, a, b).await,
        Commands::Vote { user, pair, value } => {
            commands::pairs::run_vote(&app, user, pair, value).await
        },
        Commands::Tally { pair } => commands::pairs::run_tally(&app, pair).await,
        Commands::Equivalents { saying, language } => {
            commands::pairs::run_equivalents(&app, saying, language.as_deref()).await
        },
        Commands::Translations { saying } => commands::pairs::run_translations(&app, saying).await,
        Commands::Review { language_a, language_b, user, batch } => {
            commands::pairs::run_review(&app, user, &language_a, &language_b, batch).await
        },
        Commands::Suggest { user, source_language, target_language, source_text, target_text } => {
            commands::suggestions::run_suggest(
                &app,
                user,
                &source_language,
                &target_language,
                &source_text,
                &target_text,
            )
            .await
        },
        Commands::Suggestions { limit } => commands::suggestions::run_list(&app, limit).await,
        Commands::Approve { id } => commands::suggestions::run_approve(&app, id).await,
        Commands::Reject { id } => commands::suggestions::run_reject(&app, id).await,
    }
}
