//! Service tests against a temp-file SQLite backend.

use std::sync::Arc;

use proverbia_core::{Saying, Settings, TranslationPair};
use proverbia_storage::StorageBackend;
use tempfile::TempDir;

use crate::{PairService, RankingService, ReviewService, SayingService, SuggestionService, VoteService};

pub struct Fixture {
    pub sayings: Arc<SayingService>,
    pub pairs: Arc<PairService>,
    pub votes: VoteService,
    pub ranking: RankingService,
    pub review: ReviewService,
    pub suggestions: SuggestionService,
    _dir: TempDir,
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn fixture_with(settings: Settings) -> Fixture {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(StorageBackend::new_sqlite(&dir.path().join("test.db")).unwrap());
    let settings = Arc::new(settings);
    let sayings = Arc::new(SayingService::new(Arc::clone(&storage), Arc::clone(&settings)));
    let pairs = Arc::new(PairService::new(Arc::clone(&storage)));
    Fixture {
        votes: VoteService::new(Arc::clone(&storage)),
        ranking: RankingService::new(Arc::clone(&storage)),
        review: ReviewService::new(Arc::clone(&storage), Arc::clone(&settings)),
        suggestions: SuggestionService::new(
            Arc::clone(&storage),
            Arc::clone(&sayings),
            Arc::clone(&pairs),
        ),
        sayings,
        pairs,
        _dir: dir,
    }
}

pub fn fixture() -> Fixture {
    fixture_with(Settings::default())
}

impl Fixture {
    /// Register each language code.
    #[expect(clippy::unwrap_used, reason = "test code")]
    pub async fn languages(&self, codes: &[&str]) {
        for code in codes {
            self.sayings.create_language(code, None).await.unwrap();
        }
    }

    #[expect(clippy::unwrap_used, reason = "test code")]
    pub async fn saying(&self, code: &str, text: &str) -> Saying {
        self.sayings.create_saying(code, text).await.unwrap()
    }

    #[expect(clippy::unwrap_used, reason = "test code")]
    pub async fn link(&self, a: &Saying, b: &Saying) -> TranslationPair {
        self.pairs.register_pair(a.id, b.id).await.unwrap()
    }
}

mod pair_tests;
mod ranking_tests;
mod suggestion_tests;
mod vote_tests;
