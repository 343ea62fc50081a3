//! Vote ledger service implementation.
//!
//! This module provides the main service for recording and tallying votes.
//! The route layer uses this to cast and retract votes, answer "has this
//! user voted?", and pick the most voted item among a candidate list.
//!
//! # Note on Atomicity
//!
//! There is no read-modify-write anywhere in this service. A cast is a single
//! insert guarded by the store's `(voter, target)` uniqueness constraint and
//! a retraction is a single delete, so concurrent callers cannot produce
//! duplicate votes or lost updates. Id-addressed retraction performs a
//! lookup for the ownership check before its delete; a vote removed by a
//! racing caller in between simply surfaces as not-found.

use crate::errors::VoteLedgerError;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::debug;
use vote_ledger_repository::{VoteRepository, VoteRepositoryError};
use vote_ledger_shared::types::{TargetId, Vote, VoteId, VoteTally, VoterId};

/// The vote ledger.
///
/// Holds a handle to the vote repository and nothing else, so one instance is
/// safe to share across all concurrent request handlers.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use vote_ledger::VoteLedger;
/// use vote_ledger_repository::PostgresVoteRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let repository = PostgresVoteRepository::connect("postgres://localhost/app").await?;
/// let ledger = VoteLedger::new(Arc::new(repository));
///
/// let voter = uuid::Uuid::new_v4();
/// let post = uuid::Uuid::new_v4();
/// let vote_id = ledger.cast(voter, post).await?;
/// assert!(ledger.is_voter(&voter, &post).await?);
/// ledger.retract_by_id(&voter, &vote_id).await?;
/// # Ok(())
/// # }
/// ```
pub struct VoteLedger {
    repository: Arc<dyn VoteRepository>,
}

impl VoteLedger {
    /// Creates a new ledger over the given vote repository.
    pub fn new(repository: Arc<dyn VoteRepository>) -> Self {
        Self { repository }
    }

    /// Casts a vote by `voter` on `target` and returns the new vote's id.
    ///
    /// The insert is a single store round-trip; if it is cancelled, no
    /// partial record remains. A store-level uniqueness rejection maps to
    /// `DuplicateVote`, every other repository error passes through.
    ///
    /// # Errors
    ///
    /// Returns `VoteLedgerError::DuplicateVote` if `(voter, target)` already
    /// has a vote.
    pub async fn cast(
        &self,
        voter: VoterId,
        target: TargetId,
    ) -> Result<VoteId, VoteLedgerError> {
        let vote = Vote::new(voter, target, OffsetDateTime::now_utc().unix_timestamp());

        match self.repository.insert_vote(&vote).await {
            Ok(()) => {
                debug!(%voter, %target, vote_id = %vote.id, "vote cast");
                Ok(vote.id)
            }
            Err(VoteRepositoryError::UniqueViolation { .. }) => {
                Err(VoteLedgerError::DuplicateVote { voter, target })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Retracts the vote cast by `voter` on `target`.
    ///
    /// Double retraction fails loud: callers wanting idempotent semantics
    /// check `is_voter` first.
    ///
    /// # Errors
    ///
    /// Returns `VoteLedgerError::VoteNotFound` if no such vote exists.
    pub async fn retract(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<(), VoteLedgerError> {
        if !self.repository.delete_vote_by_pair(voter, target).await? {
            return Err(VoteLedgerError::not_found_pair(voter, target));
        }
        debug!(%voter, %target, "vote retracted");
        Ok(())
    }

    /// Retracts a vote by its id on behalf of `voter`.
    ///
    /// Equivalent to [`VoteLedger::retract`] over the same record set, with
    /// an ownership check so a caller cannot retract someone else's vote by
    /// guessing its id.
    ///
    /// # Errors
    ///
    /// Returns `VoteLedgerError::VoteNotFound` if the id is unknown (or the
    /// vote was concurrently removed), `VoteLedgerError::VoterMismatch` if
    /// the vote was cast by a different voter.
    pub async fn retract_by_id(
        &self,
        voter: &VoterId,
        vote_id: &VoteId,
    ) -> Result<(), VoteLedgerError> {
        self.verify_vote_owner(voter, vote_id).await?;
        if !self.repository.delete_vote_by_id(vote_id).await? {
            return Err(VoteLedgerError::not_found_id(vote_id));
        }
        debug!(%voter, %vote_id, "vote retracted by id");
        Ok(())
    }

    /// Reports whether `voter` currently has a vote on `target`.
    pub async fn is_voter(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<bool, VoteLedgerError> {
        Ok(self
            .repository
            .find_vote_by_pair(voter, target)
            .await?
            .is_some())
    }

    /// Confirms that `voter` originated the vote with id `vote_id` and
    /// returns the vote.
    ///
    /// # Errors
    ///
    /// Returns `VoteLedgerError::VoteNotFound` if the id is unknown,
    /// `VoteLedgerError::VoterMismatch` if a different voter owns it.
    pub async fn verify_vote_owner(
        &self,
        voter: &VoterId,
        vote_id: &VoteId,
    ) -> Result<Vote, VoteLedgerError> {
        let vote = self
            .repository
            .find_vote_by_id(vote_id)
            .await?
            .ok_or_else(|| VoteLedgerError::not_found_id(vote_id))?;

        if vote.voter != *voter {
            return Err(VoteLedgerError::VoterMismatch {
                vote_id: *vote_id,
                claimed: *voter,
            });
        }
        Ok(vote)
    }

    /// Read-only lookup of the vote cast by `voter` on `target`, if any.
    pub async fn find_vote(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<Option<Vote>, VoteLedgerError> {
        Ok(self.repository.find_vote_by_pair(voter, target).await?)
    }

    /// Counts the votes currently recorded for `target`.
    ///
    /// Derived from the store at call time; this layer adds no cache.
    pub async fn count_votes(&self, target: &TargetId) -> Result<i64, VoteLedgerError> {
        Ok(self.repository.count_votes_for_target(target).await?)
    }

    /// Selects the most voted target among `candidates`.
    ///
    /// Ties break deterministically to the first candidate in the supplied
    /// order: the running maximum only moves on a strictly greater count. A
    /// candidate set where nobody voted is not an error, the first candidate
    /// wins with count 0.
    ///
    /// Counts are read independently per candidate with no cross-candidate
    /// snapshot; a vote arriving mid-scan is tolerated, the result is "most
    /// voted as of approximately now".
    ///
    /// # Errors
    ///
    /// Returns `VoteLedgerError::EmptyCandidates` if `candidates` is empty.
    pub async fn select_most_voted(
        &self,
        candidates: &[TargetId],
    ) -> Result<VoteTally, VoteLedgerError> {
        let Some((first, rest)) = candidates.split_first() else {
            return Err(VoteLedgerError::EmptyCandidates);
        };

        let mut winner = VoteTally {
            target: *first,
            count: self.repository.count_votes_for_target(first).await?,
        };
        for candidate in rest {
            let count = self.repository.count_votes_for_target(candidate).await?;
            if count > winner.count {
                winner = VoteTally {
                    target: *candidate,
                    count,
                };
            }
        }

        debug!(target = %winner.target, count = winner.count, "selected most voted");
        Ok(winner)
    }
}
