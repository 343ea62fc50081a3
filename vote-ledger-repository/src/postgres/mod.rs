//! PostgreSQL backend for the vote repository.
mod vote_repository;

pub use vote_repository::PostgresVoteRepository;
