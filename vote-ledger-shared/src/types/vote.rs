use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a persisted vote record, assigned by the ledger at cast time.
pub type VoteId = Uuid;

/// Identity of the user casting a vote. Resolved by the caller (session
/// layer); the ledger treats it as opaque.
pub type VoterId = Uuid;

/// Identity of the entity being voted on (a post, a comment, anything
/// votable). The ledger never inspects what a target is or whether it
/// exists; kind checks belong to the caller.
pub type TargetId = Uuid;

/// One persisted vote linking a voter to a target.
///
/// At most one `Vote` exists per `(voter, target)` pair at any time; the
/// backing store enforces this with a uniqueness constraint at insert time.
/// A vote is never mutated in place, it is created whole by a cast and
/// removed whole by a retraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vote {
    pub id: VoteId,
    pub voter: VoterId,
    pub target: TargetId,
    /// Unix-seconds timestamp, an ordering hint rather than an exact clock.
    pub created_at: i64,
}

impl Vote {
    /// Builds a new vote with a fresh id for the given pair.
    pub fn new(voter: VoterId, target: TargetId, created_at: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            voter,
            target,
            created_at,
        }
    }
}
