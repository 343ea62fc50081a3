//! Error types for the vote ledger repository.
//! Consolidates and re-exports error types related to vote store operations.
mod votes;

pub use votes::VoteRepositoryError;
