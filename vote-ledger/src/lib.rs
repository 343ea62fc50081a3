//! # Vote Ledger
//! Records who voted for what, prevents duplicate votes, tallies counts, and
//! selects the most voted item among a candidate set.
//!
//! The ledger is a library-level component consumed by an external route
//! layer. That layer resolves the voter from a session and checks that the
//! target exists before calling in; the ledger itself treats both voter and
//! target as opaque identifiers and maps its own errors for the route layer
//! to translate into transport responses.
//!
//! Uniqueness of `(voter, target)` is delegated entirely to the backing
//! store's insert-time constraint, so a single `VoteLedger` instance can be
//! shared across concurrent tasks without any application-level locking.
pub mod errors;
mod service;

pub use errors::VoteLedgerError;
pub use service::VoteLedger;
