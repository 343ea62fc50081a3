//! # Vote Ledger Repository
//! This crate provides traits and implementations for the vote record store.
//! It includes definitions for errors, interfaces, a concrete implementation
//! for PostgreSQL, and an in-memory implementation for embedded use and tests.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;

pub use errors::VoteRepositoryError;
pub use interfaces::VoteRepository;
pub use memory::MemoryVoteRepository;
pub use postgres::PostgresVoteRepository;
