use proverbia_core::{SuggestionId, SuggestionStatus, UserId};

use super::fixture;

#[tokio::test]
async fn suggestions_are_normalized_and_queued() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let suggestion = f
        .suggestions
        .suggest(UserId(3), "EN", "fa", "  Time  IS Gold ", "Vaght Talast")
        .await
        .unwrap();
    assert_eq!(suggestion.source_text, "time is gold");
    assert_eq!(suggestion.target_text, "vaght talast");
    assert_eq!(suggestion.status, SuggestionStatus::PendingReview);

    let pending = f.suggestions.list_pending(10).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, suggestion.id);
}

#[tokio::test]
async fn blank_suggestion_is_invalid() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let err = f.suggestions.suggest(UserId(3), "en", "fa", "  ", "x").await.unwrap_err();
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn approval_reuses_sayings_and_links_them() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let existing = f.saying("en", "Time is gold.").await;
    let suggestion =
        f.suggestions.suggest(UserId(3), "en", "fa", "time is gold", "vaght talast").await.unwrap();

    let approved = f.suggestions.approve(suggestion.id).await.unwrap();
    assert_eq!(approved.source.id, existing.id);
    assert_eq!(approved.target.raw_text, "vaght talast");
    assert_eq!(approved.suggestion.status, SuggestionStatus::Approved);
    assert!(approved.pair.key.contains(existing.id));

    let ranked = f.ranking.equivalents_of(existing.id, "fa").await.unwrap();
    assert_eq!(ranked.len(), 1);
    assert!(f.suggestions.list_pending(10).await.unwrap().is_empty());

    // Approving is one-way.
    assert!(f.suggestions.approve(suggestion.id).await.unwrap_err().is_invalid_input());
}

#[tokio::test]
async fn approval_accepts_an_already_registered_pair() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let pair = f.link(&a, &b).await;

    let suggestion =
        f.suggestions.suggest(UserId(3), "fa", "en", "vaght talast", "time is gold").await.unwrap();
    let approved = f.suggestions.approve(suggestion.id).await.unwrap();
    assert_eq!(approved.pair.id, pair.id);
}

#[tokio::test]
async fn rejection_leaves_no_sayings_behind() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let suggestion =
        f.suggestions.suggest(UserId(3), "en", "fa", "time is gold", "vaght talast").await.unwrap();

    let rejected = f.suggestions.reject(suggestion.id).await.unwrap();
    assert_eq!(rejected.status, SuggestionStatus::Rejected);
    assert!(f.sayings.find_exact("en", "time is gold").await.unwrap().is_none());
    assert!(f.suggestions.reject(suggestion.id).await.unwrap_err().is_invalid_input());
    assert!(f.suggestions.reject(SuggestionId(77)).await.unwrap_err().is_not_found());
}
