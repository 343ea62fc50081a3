//! This module defines the `VoteRepository` trait, which provides an interface
//! for interacting with the underlying data store for vote records.
//! It abstracts the store operations for persistence and retrieval.
use crate::errors::VoteRepositoryError;
use vote_ledger_shared::types::{TargetId, Vote, VoteId, VoterId};

/// A trait that defines the interface for interacting with the vote store.
///
/// Implementors provide atomic, single-round-trip operations over individual
/// vote records. The one correctness-critical requirement on a backend is
/// that `insert_vote` enforces uniqueness of `(voter, target)` atomically at
/// insert time: two concurrent inserts for the same pair must yield exactly
/// one success and one `UniqueViolation`. No operation performs a
/// read-modify-write cycle on shared state.
#[async_trait::async_trait]
pub trait VoteRepository: Send + Sync {
    /// Persists a single vote record.
    ///
    /// # Arguments
    ///
    /// * `vote` - The vote to insert, id and timestamp already assigned.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success, `VoteRepositoryError::UniqueViolation`
    /// if a vote for the same `(voter, target)` pair already exists, or
    /// another `VoteRepositoryError` if the insertion fails.
    async fn insert_vote(&self, vote: &Vote) -> Result<(), VoteRepositoryError>;

    /// Looks up the vote cast by `voter` on `target`, if any.
    async fn find_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<Option<Vote>, VoteRepositoryError>;

    /// Looks up a vote by its own identity, if it exists.
    async fn find_vote_by_id(&self, vote_id: &VoteId)
    -> Result<Option<Vote>, VoteRepositoryError>;

    /// Deletes the vote cast by `voter` on `target`.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was removed, `Ok(false)` if no such vote
    /// existed. The distinction lets the caller decide whether absence is an
    /// error.
    async fn delete_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<bool, VoteRepositoryError>;

    /// Deletes a vote by its own identity.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a record was removed, `Ok(false)` if the id was unknown.
    async fn delete_vote_by_id(&self, vote_id: &VoteId) -> Result<bool, VoteRepositoryError>;

    /// Counts the vote records whose `target` field matches.
    ///
    /// The count reflects the store at call time; no caching happens at this
    /// layer.
    async fn count_votes_for_target(
        &self,
        target: &TargetId,
    ) -> Result<i64, VoteRepositoryError>;
}
