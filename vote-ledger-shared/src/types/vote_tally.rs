use crate::types::TargetId;
use serde::{Deserialize, Serialize};

/// The vote count for one target, derived on demand from the vote records.
///
/// Also the result type of most-voted selection, where `count` is the
/// winning tally at the time the candidates were scanned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteTally {
    pub target: TargetId,
    pub count: i64,
}
