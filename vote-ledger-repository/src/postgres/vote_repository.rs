//! PostgreSQL implementation of the vote repository.
//!
//! Provides a production PostgreSQL backend for the `VoteRepository` trait
//! with connection pooling and store-enforced uniqueness.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::PgPool`
//! - A `UNIQUE (voter, target)` constraint on the `votes` table carries the
//!   no-duplicate-vote invariant; the application never read-modify-writes
//! - Runtime-checked queries, so the crate builds without a live database
//!
//! ## Database Tables
//!
//! - `votes`: one row per `(voter, target)` pair, addressable by vote id
use crate::{VoteRepository, VoteRepositoryError};
use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::debug;
use vote_ledger_shared::types::{TargetId, Vote, VoteId, VoterId};

/// Row shape of the `votes` table.
///
/// Kept separate from the shared `Vote` type so the unix-seconds timestamp
/// conversion stays at the database boundary.
#[derive(sqlx::FromRow)]
struct VoteRow {
    id: VoteId,
    voter: VoterId,
    target: TargetId,
    created_at: OffsetDateTime,
}

impl From<VoteRow> for Vote {
    fn from(row: VoteRow) -> Self {
        Vote {
            id: row.id,
            voter: row.voter,
            target: row.target,
            created_at: row.created_at.unix_timestamp(),
        }
    }
}

/// PostgreSQL implementation of the vote repository.
///
/// Every operation is a single statement, so each is atomic on its own and
/// no application-level locking is required. Concurrent inserts for the same
/// `(voter, target)` pair are serialized by the unique index: the loser
/// surfaces as `VoteRepositoryError::UniqueViolation`.
pub struct PostgresVoteRepository {
    pool: sqlx::PgPool,
}

impl PostgresVoteRepository {
    /// Creates a new PostgreSQL vote repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with the votes schema
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, VoteRepositoryError> {
        Ok(Self { pool })
    }

    /// Connects to PostgreSQL and creates a repository over a fresh pool.
    ///
    /// # Arguments
    ///
    /// * `url` - PostgreSQL connection string, typically from `DATABASE_URL`
    pub async fn connect(url: &str) -> Result<Self, VoteRepositoryError> {
        let pool = sqlx::PgPool::connect(url)
            .await
            .map_err(VoteRepositoryError::DatabaseError)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn insert_vote(&self, vote: &Vote) -> Result<(), VoteRepositoryError> {
        let created_at = OffsetDateTime::from_unix_timestamp(vote.created_at)
            .map_err(|_| VoteRepositoryError::InvalidTimestamp(vote.created_at))?;

        let result = sqlx::query(
            "INSERT INTO votes (id, voter, target, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(vote.id)
        .bind(vote.voter)
        .bind(vote.target)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(vote_id = %vote.id, "vote row inserted");
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(VoteRepositoryError::UniqueViolation {
                    voter: vote.voter,
                    target: vote.target,
                })
            }
            Err(e) => Err(VoteRepositoryError::DatabaseError(e)),
        }
    }

    async fn find_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<Option<Vote>, VoteRepositoryError> {
        let row: Option<VoteRow> = sqlx::query_as(
            "SELECT id, voter, target, created_at FROM votes WHERE voter = $1 AND target = $2",
        )
        .bind(*voter)
        .bind(*target)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vote::from))
    }

    async fn find_vote_by_id(
        &self,
        vote_id: &VoteId,
    ) -> Result<Option<Vote>, VoteRepositoryError> {
        let row: Option<VoteRow> =
            sqlx::query_as("SELECT id, voter, target, created_at FROM votes WHERE id = $1")
                .bind(*vote_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Vote::from))
    }

    async fn delete_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<bool, VoteRepositoryError> {
        let result = sqlx::query("DELETE FROM votes WHERE voter = $1 AND target = $2")
            .bind(*voter)
            .bind(*target)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_vote_by_id(&self, vote_id: &VoteId) -> Result<bool, VoteRepositoryError> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(*vote_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_votes_for_target(
        &self,
        target: &TargetId,
    ) -> Result<i64, VoteRepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE target = $1")
            .bind(*target)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
