use proverbia_core::{PairKey, SayingId, UserId, VoteValue};

use super::{create_language, create_saying, create_test_storage, link};
use crate::StorageError;

#[test]
fn test_pair_is_unique_in_both_orders() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let fa = create_language(&storage, "fa");
    let a = create_saying(&storage, &en, "Time is gold");
    let b = create_saying(&storage, &fa, "وقت طلاست");

    let pair = link(&storage, &b, &a);
    assert_eq!(pair.saying_low_id(), a.id.min(b.id));
    assert_eq!(pair.saying_high_id(), a.id.max(b.id));

    let err = storage.insert_pair(PairKey::new(a.id, b.id).unwrap()).unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");
    let err = storage.insert_pair(PairKey::new(b.id, a.id).unwrap()).unwrap_err();
    assert!(err.is_duplicate());
}

#[test]
fn test_pair_with_missing_saying_is_not_found() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let a = create_saying(&storage, &en, "Time is gold");
    let err = storage.insert_pair(PairKey::new(a.id, SayingId(4242)).unwrap()).unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }), "got {err:?}");
}

#[test]
fn test_find_pair_by_key() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let fa = create_language(&storage, "fa");
    let a = create_saying(&storage, &en, "Time is gold");
    let b = create_saying(&storage, &fa, "وقت طلاست");
    let pair = link(&storage, &a, &b);

    let found = storage.find_pair(PairKey::new(b.id, a.id).unwrap()).unwrap().unwrap();
    assert_eq!(found.id, pair.id);
    assert_eq!(storage.get_pair(pair.id).unwrap().unwrap(), found);
}

#[test]
fn test_pairs_for_is_direction_agnostic() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let fa = create_language(&storage, "fa");
    let fr = create_language(&storage, "fr");
    let a = create_saying(&storage, &en, "Time is gold");
    let b = create_saying(&storage, &fa, "وقت طلاست");
    let c = create_saying(&storage, &fr, "Le temps c'est de l'or");
    let d = create_saying(&storage, &fa, "وقت را غنیمت شمار");

    let ab = link(&storage, &a, &b);
    let ca = link(&storage, &c, &a);
    link(&storage, &c, &d);

    let ids: Vec<_> = storage.pairs_for(a.id).unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, [ab.id, ca.id]);
}

#[test]
fn test_pairs_between_languages_either_orientation() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let fa = create_language(&storage, "fa");
    let fr = create_language(&storage, "fr");
    let a = create_saying(&storage, &en, "Time is gold");
    // Created before the English saying, so it lands on the low side.
    let early_fa = create_saying(&storage, &fa, "صبر تلخ است");
    let late_en = create_saying(&storage, &en, "Patience is bitter");
    let b = create_saying(&storage, &fa, "وقت طلاست");
    let c = create_saying(&storage, &fr, "Le temps c'est de l'or");

    let p1 = link(&storage, &a, &b);
    let p2 = link(&storage, &early_fa, &late_en);
    link(&storage, &a, &c);

    let forward: Vec<_> = storage.pairs_between(en.id, fa.id).unwrap().iter().map(|p| p.id).collect();
    let backward: Vec<_> = storage.pairs_between(fa.id, en.id).unwrap().iter().map(|p| p.id).collect();
    assert_eq!(forward, [p1.id, p2.id]);
    assert_eq!(forward, backward);
}

#[test]
fn test_unreviewed_pairs_exclude_any_vote_row() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");
    let fa = create_language(&storage, "fa");
    let mut pairs = Vec::new();
    for i in 0..3 {
        let a = create_saying(&storage, &en, &format!("english {i}"));
        let b = create_saying(&storage, &fa, &format!("farsi {i}"));
        pairs.push(link(&storage, &a, &b));
    }
    let user = UserId(7);
    storage.cast_vote(user, pairs[0].id, VoteValue::Up).unwrap();
    // Up then up again leaves a retracted row, which still counts as reviewed.
    storage.cast_vote(user, pairs[1].id, VoteValue::Up).unwrap();
    storage.cast_vote(user, pairs[1].id, VoteValue::Up).unwrap();

    let unreviewed = storage.unreviewed_pairs_between(en.id, fa.id, user).unwrap();
    let ids: Vec<_> = unreviewed.iter().map(|p| p.id).collect();
    assert_eq!(ids, [pairs[2].id]);

    let other_user = storage.unreviewed_pairs_between(en.id, fa.id, UserId(8)).unwrap();
    assert_eq!(other_user.len(), 3);
}
