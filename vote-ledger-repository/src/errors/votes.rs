//! Error types for the vote repository.
//! Defines specific errors that can occur during store operations on vote records.
use thiserror::Error;
use vote_ledger_shared::types::{TargetId, VoterId};

/// Represents errors that can occur within the vote repository.
///
/// `UniqueViolation` is the correctness-critical variant: it is how a backend
/// reports that the `(voter, target)` uniqueness constraint rejected an
/// insert, and the ledger layer translates it into its duplicate-vote error.
#[derive(Debug, Error)]
pub enum VoteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Vote already recorded for voter {voter} on target {target}")]
    UniqueViolation { voter: VoterId, target: TargetId },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
