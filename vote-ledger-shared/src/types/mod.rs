mod vote;
mod vote_tally;

pub use vote::{TargetId, Vote, VoteId, VoterId};
pub use vote_tally::VoteTally;
