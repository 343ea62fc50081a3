//! In-memory implementation of the vote repository.
//!
//! Backs the ledger in tests and in embedded deployments that do not want a
//! database. The map is keyed by `(voter, target)`, so the key itself carries
//! the uniqueness constraint, the same guarantee the PostgreSQL backend gets
//! from its unique index.
use crate::{VoteRepository, VoteRepositoryError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use vote_ledger_shared::types::{TargetId, Vote, VoteId, VoterId};

/// In-memory vote repository.
///
/// Every operation takes the mutex, completes its mutation, and releases it
/// without awaiting in between, so each operation is atomic with respect to
/// concurrent callers. Two simultaneous inserts for the same pair therefore
/// resolve to one success and one `UniqueViolation`, never two rows.
#[derive(Default)]
pub struct MemoryVoteRepository {
    votes: Mutex<HashMap<(VoterId, TargetId), Vote>>,
}

impl MemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoteRepository for MemoryVoteRepository {
    async fn insert_vote(&self, vote: &Vote) -> Result<(), VoteRepositoryError> {
        let mut votes = self.votes.lock().await;
        let key = (vote.voter, vote.target);
        if votes.contains_key(&key) {
            return Err(VoteRepositoryError::UniqueViolation {
                voter: vote.voter,
                target: vote.target,
            });
        }
        votes.insert(key, vote.clone());
        Ok(())
    }

    async fn find_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<Option<Vote>, VoteRepositoryError> {
        let votes = self.votes.lock().await;
        Ok(votes.get(&(*voter, *target)).cloned())
    }

    async fn find_vote_by_id(
        &self,
        vote_id: &VoteId,
    ) -> Result<Option<Vote>, VoteRepositoryError> {
        let votes = self.votes.lock().await;
        Ok(votes.values().find(|v| v.id == *vote_id).cloned())
    }

    async fn delete_vote_by_pair(
        &self,
        voter: &VoterId,
        target: &TargetId,
    ) -> Result<bool, VoteRepositoryError> {
        let mut votes = self.votes.lock().await;
        Ok(votes.remove(&(*voter, *target)).is_some())
    }

    async fn delete_vote_by_id(&self, vote_id: &VoteId) -> Result<bool, VoteRepositoryError> {
        let mut votes = self.votes.lock().await;
        let key = votes
            .iter()
            .find(|(_, v)| v.id == *vote_id)
            .map(|(k, _)| *k);
        match key {
            Some(key) => {
                votes.remove(&key);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count_votes_for_target(
        &self,
        target: &TargetId,
    ) -> Result<i64, VoteRepositoryError> {
        let votes = self.votes.lock().await;
        Ok(votes.values().filter(|v| v.target == *target).count() as i64)
    }
}
