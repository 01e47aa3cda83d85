use proverbia_core::SayingId;

use super::fixture;
use crate::ServiceError;

#[tokio::test]
async fn pair_is_unique_in_both_orders() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;

    let pair = f.pairs.register_pair(b.id, a.id).await.unwrap();
    assert!(pair.saying_low_id() < pair.saying_high_id());

    for (x, y) in [(a.id, b.id), (b.id, a.id)] {
        let err = f.pairs.register_pair(x, y).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicatePair { .. }), "{err:?}");
        assert!(err.is_conflict());
    }
}

#[tokio::test]
async fn same_saying_cannot_be_paired() {
    let f = fixture();
    f.languages(&["en"]).await;
    let a = f.saying("en", "Time is gold").await;
    let err = f.pairs.register_pair(a.id, a.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::SameSaying));
    assert!(err.is_invalid_input());
}

#[tokio::test]
async fn missing_saying_is_not_found() {
    let f = fixture();
    f.languages(&["en"]).await;
    let a = f.saying("en", "Time is gold").await;
    let err = f.pairs.register_pair(a.id, SayingId(9_999)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn ensure_pair_returns_existing_pair() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let first = f.pairs.ensure_pair(a.id, b.id).await.unwrap();
    let second = f.pairs.ensure_pair(b.id, a.id).await.unwrap();
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn get_pair_resolves_both_sayings() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let pair = f.link(&b, &a).await;

    let resolved = f.pairs.get_pair(pair.id).await.unwrap();
    assert_eq!(resolved.low.id, a.id);
    assert_eq!(resolved.high.id, b.id);
}

#[tokio::test]
async fn pairs_for_and_between_are_direction_agnostic() {
    let f = fixture();
    f.languages(&["en", "fa", "fr"]).await;
    let en = f.saying("en", "Time is gold").await;
    let fa = f.saying("fa", "vaght talast").await;
    let fr = f.saying("fr", "Le temps c'est de l'or").await;
    let fa2 = f.saying("fa", "zaman talast").await;
    let p1 = f.link(&en, &fa).await;
    let p2 = f.link(&fr, &en).await;
    let p3 = f.link(&fa2, &en).await;

    let for_en: Vec<_> = f.pairs.pairs_for(en.id).await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(for_en, [p1.id, p2.id, p3.id]);

    let en_fa: Vec<_> =
        f.pairs.pairs_between("en", "fa").await.unwrap().into_iter().map(|p| p.id).collect();
    let fa_en: Vec<_> =
        f.pairs.pairs_between("fa", "en").await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(en_fa, [p1.id, p3.id]);
    assert_eq!(en_fa, fa_en);

    assert!(f.pairs.pairs_between("en", "de").await.unwrap_err().is_not_found());
}
