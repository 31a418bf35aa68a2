use serde::{Deserialize, Serialize};

/// One presented matchup, in display order (left, right).
///
/// The winner is not stored; it is reflected in the rating update applied at
/// the time of the decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonRecord(pub String, pub String);

impl ComparisonRecord {
    pub fn new(shown_first: impl Into<String>, shown_second: impl Into<String>) -> Self {
        ComparisonRecord(shown_first.into(), shown_second.into())
    }

    pub fn shown_first(&self) -> &str {
        &self.0
    }

    pub fn shown_second(&self) -> &str {
        &self.1
    }
}

/// A user decision: `winner` was preferred over `loser`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub winner: String,
    pub loser: String,
}

impl Decision {
    pub fn new(winner: impl Into<String>, loser: impl Into<String>) -> Self {
        Decision {
            winner: winner.into(),
            loser: loser.into(),
        }
    }
}

/// A pairing: two item IDs to present, `(left, right)`.
pub type Pair = (String, String);

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub item: String,
    pub rating: i64,
    /// Number of history entries this item appears in.
    pub comparisons: usize,
}
