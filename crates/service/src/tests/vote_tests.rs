use proverbia_core::{PairId, UserId, VoteState, VoteValue};

use super::fixture;
use crate::ServiceError;

#[tokio::test]
async fn votes_toggle() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let pair = f.link(&a, &b).await;
    let user = UserId(1);

    let vote = f.votes.cast_vote(user, pair.id, 1).await.unwrap();
    assert_eq!(vote.state, VoteState::Upvoted);
    assert_eq!(f.votes.user_value(user, pair.id).await.unwrap(), VoteValue::Up);

    let vote = f.votes.cast_vote(user, pair.id, 1).await.unwrap();
    assert_eq!(vote.state, VoteState::Retracted);
    assert_eq!(vote.value, VoteValue::Neutral);

    f.votes.cast_vote(user, pair.id, 1).await.unwrap();
    let vote = f.votes.cast_vote(user, pair.id, -1).await.unwrap();
    assert_eq!(vote.value, VoteValue::Down);
    let tally = f.votes.tally(pair.id).await.unwrap();
    assert_eq!((tally.upvotes, tally.downvotes), (0, 1));

    let vote = f.votes.cast_vote(user, pair.id, 0).await.unwrap();
    assert_eq!(vote.state, VoteState::Retracted);
    let tally = f.votes.tally(pair.id).await.unwrap();
    assert_eq!((tally.upvotes, tally.downvotes), (0, 0));
}

#[tokio::test]
async fn tally_counts_each_user_once() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let pair = f.link(&a, &b).await;

    for user in 1..=3 {
        f.votes.cast_vote(UserId(user), pair.id, 1).await.unwrap();
    }
    f.votes.cast_vote(UserId(4), pair.id, -1).await.unwrap();
    f.votes.cast_vote(UserId(5), pair.id, 0).await.unwrap();

    let tally = f.votes.tally(pair.id).await.unwrap();
    assert_eq!((tally.upvotes, tally.downvotes), (3, 1));
    assert_eq!(f.votes.user_value(UserId(9), pair.id).await.unwrap(), VoteValue::Neutral);
}

#[tokio::test]
async fn out_of_range_values_are_rejected() {
    let f = fixture();
    f.languages(&["en", "fa"]).await;
    let a = f.saying("en", "Time is gold").await;
    let b = f.saying("fa", "vaght talast").await;
    let pair = f.link(&a, &b).await;

    for value in [2, -2, 100] {
        let err = f.votes.cast_vote(UserId(1), pair.id, value).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidVoteValue(v) if v == value));
    }
    assert_eq!(f.votes.user_value(UserId(1), pair.id).await.unwrap(), VoteValue::Neutral);
}

#[tokio::test]
async fn voting_on_missing_pair_is_not_found() {
    let f = fixture();
    let err = f.votes.cast_vote(UserId(1), PairId(42), 1).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(f.votes.tally(PairId(42)).await.unwrap_err().is_not_found());
}
