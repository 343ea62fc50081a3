//! Error types for the vote ledger.
//! Defines the error taxonomy surfaced to the route layer, consolidating
//! ledger-level failures with errors propagated from the vote repository.
use thiserror::Error;
use vote_ledger_shared::types::{TargetId, VoteId, VoterId};

/// Errors surfaced by ledger operations.
///
/// All errors are reported synchronously to the immediate caller; the ledger
/// never logs-and-swallows and never retries. Store-level transient failures
/// pass through unmodified in the `Repository` variant, since retrying a cast
/// after an ambiguous failure is the caller's decision (re-check via
/// `find_vote` first).
#[derive(Debug, Error)]
pub enum VoteLedgerError {
    /// The `(voter, target)` pair already has a vote. Typically surfaced to
    /// the user as "already voted"; never retried automatically.
    #[error("Voter {voter} already voted on target {target}")]
    DuplicateVote { voter: VoterId, target: TargetId },

    /// No matching vote exists. Whether absence is acceptable (idempotent
    /// retraction) is the caller's choice, not the ledger's.
    #[error("Vote not found: {0}")]
    VoteNotFound(String),

    /// The vote id is owned by a different voter than claimed. Always an
    /// authorization failure, never retried.
    #[error("Vote {vote_id} was not cast by voter {claimed}")]
    VoterMismatch { vote_id: VoteId, claimed: VoterId },

    /// Most-voted selection was called with no candidates. A usage error.
    #[error("No candidates to select from")]
    EmptyCandidates,

    #[error("Repository error: {0}")]
    Repository(#[from] vote_ledger_repository::VoteRepositoryError),
}

impl VoteLedgerError {
    /// Not-found error for a pair-addressed lookup.
    pub fn not_found_pair(voter: &VoterId, target: &TargetId) -> Self {
        Self::VoteNotFound(format!("voter {voter} has not voted on target {target}"))
    }

    /// Not-found error for an id-addressed lookup.
    pub fn not_found_id(vote_id: &VoteId) -> Self {
        Self::VoteNotFound(format!("no vote with id {vote_id}"))
    }
}
