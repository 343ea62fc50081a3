//! Integration tests for the PostgreSQL vote repository implementation.
//!
//! These tests require a real PostgreSQL database and use SQLx test macros
//! to ensure proper test isolation and cleanup. They are ignored by default;
//! run them with a reachable `DATABASE_URL`:
//!
//! `cargo test --test postgres_votes -- --ignored`

use uuid::Uuid;
use vote_ledger_repository::{PostgresVoteRepository, VoteRepository, VoteRepositoryError};
use vote_ledger_shared::types::Vote;

fn make_vote() -> Vote {
    Vote::new(Uuid::new_v4(), Uuid::new_v4(), 1755182913)
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn insert_and_find_round_trip(pool: sqlx::PgPool) {
    let repository = PostgresVoteRepository::new(pool).await.unwrap();
    let vote = make_vote();

    repository.insert_vote(&vote).await.unwrap();

    let by_pair = repository
        .find_vote_by_pair(&vote.voter, &vote.target)
        .await
        .unwrap();
    assert_eq!(by_pair, Some(vote.clone()));

    let by_id = repository.find_vote_by_id(&vote.id).await.unwrap();
    assert_eq!(by_id, Some(vote));
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn unique_index_rejects_second_insert(pool: sqlx::PgPool) {
    let repository = PostgresVoteRepository::new(pool).await.unwrap();
    let first = make_vote();
    repository.insert_vote(&first).await.unwrap();

    // Same pair, fresh vote id: the (voter, target) index must still reject it.
    let second = Vote::new(first.voter, first.target, first.created_at);
    let err = repository.insert_vote(&second).await.unwrap_err();

    assert!(matches!(err, VoteRepositoryError::UniqueViolation { .. }));
    assert_eq!(
        repository
            .count_votes_for_target(&first.target)
            .await
            .unwrap(),
        1
    );
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn delete_by_pair_and_by_id(pool: sqlx::PgPool) {
    let repository = PostgresVoteRepository::new(pool).await.unwrap();

    let vote = make_vote();
    repository.insert_vote(&vote).await.unwrap();
    assert!(
        repository
            .delete_vote_by_pair(&vote.voter, &vote.target)
            .await
            .unwrap()
    );
    assert!(
        !repository
            .delete_vote_by_pair(&vote.voter, &vote.target)
            .await
            .unwrap()
    );

    let vote = make_vote();
    repository.insert_vote(&vote).await.unwrap();
    assert!(repository.delete_vote_by_id(&vote.id).await.unwrap());
    assert!(!repository.delete_vote_by_id(&vote.id).await.unwrap());
}

#[sqlx::test(migrations = "src/postgres/migrations")]
#[ignore = "requires a PostgreSQL instance"]
async fn count_reflects_only_matching_target(pool: sqlx::PgPool) {
    let repository = PostgresVoteRepository::new(pool).await.unwrap();
    let target = Uuid::new_v4();

    for _ in 0..3 {
        repository
            .insert_vote(&Vote::new(Uuid::new_v4(), target, 1755182913))
            .await
            .unwrap();
    }
    repository.insert_vote(&make_vote()).await.unwrap();

    assert_eq!(repository.count_votes_for_target(&target).await.unwrap(), 3);
}
