//! # Vote Ledger Shared
//! This crate defines shared data structures and types used across the vote
//! ledger crates. It includes the vote record itself, the opaque identifier
//! aliases, and the derived tally aggregate.
pub mod types;
