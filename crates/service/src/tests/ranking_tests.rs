use proverbia_core::{PairId, SayingId, UserId};

use super::{Fixture, fixture};

async fn vote_many(f: &Fixture, pair: PairId, up: i64, down: i64) {
    let mut user = 100 * pair.get();
    for _ in 0..up {
        user += 1;
        f.votes.cast_vote(UserId(user), pair, 1).await.unwrap();
    }
    for _ in 0..down {
        user += 1;
        f.votes.cast_vote(UserId(user), pair, -1).await.unwrap();
    }
}

#[tokio::test]
async fn equivalents_rank_by_confidence_not_raw_score() {
    let f = fixture();
    f.languages(&["en", "fa", "fr"]).await;
    let a = f.saying("en", "Better late than never").await;
    let c = f.saying("fa", "هرگز دیر نیست").await;
    let b = f.saying("fa", "دیر رسیدن بهتر از هرگز نرسیدن است").await;
    let d = f.saying("fr", "Mieux vaut tard que jamais").await;

    let ac = f.link(&a, &c).await;
    let ab = f.link(&b, &a).await;
    f.link(&a, &d).await;
    vote_many(&f, ab.id, 4, 1).await;
    vote_many(&f, ac.id, 1, 0).await;

    let ranked = f.ranking.equivalents_of(a.id, "fa").await.unwrap();
    let ids: Vec<SayingId> = ranked.iter().map(|t| t.saying.id).collect();
    assert_eq!(ids, [b.id, c.id]);
    assert!((ranked[0].confidence - 0.3755).abs() < 1e-3);
    assert!((ranked[1].confidence - 0.2065).abs() < 1e-3);
    assert_eq!((ranked[0].upvotes, ranked[0].downvotes), (4, 1));
    assert_eq!(ranked[0].saying.canonical_text, "دیر رسیدن بهتر از هرگز نرسیدن است");

    let all = f.ranking.translations_for(a.id).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[2].saying.id, d.id);
    assert!(all[2].confidence.abs() < f64::EPSILON);
}

#[tokio::test]
async fn ties_keep_creation_order() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let first = f.saying("fa", "zaman talast").await;
    let second = f.saying("fa", "vaght talast").await;
    f.link(&a, &first).await;
    f.link(&second, &a).await;

    let ids: Vec<SayingId> =
        f.ranking.equivalents_of(a.id, "fa").await.unwrap().iter().map(|t| t.saying.id).collect();
    assert_eq!(ids, [first.id, second.id]);
}

#[tokio::test]
async fn translations_are_symmetric() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    f.link(&a, &b).await;

    let from_fa = f.ranking.equivalents_of(b.id, "en").await.unwrap();
    assert_eq!(from_fa.len(), 1);
    assert_eq!(from_fa[0].saying.id, a.id);
}

#[tokio::test]
async fn unknown_saying_or_language_is_not_found() {
    let f = fixture();
    f.languages(&["en"]).await;
    let a = f.saying("en", "Time is gold").await;
    assert!(f.ranking.translations_for(SayingId(404)).await.unwrap_err().is_not_found());
    assert!(f.ranking.equivalents_of(a.id, "fa").await.unwrap_err().is_not_found());
    assert!(f.ranking.translations_for(a.id).await.unwrap().is_empty());
}
