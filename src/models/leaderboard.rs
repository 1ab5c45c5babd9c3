use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// One ranked row of the leaderboard.
///
/// `rank` is 1-based competition ranking: entries with equal donation totals
/// share a rank and the next distinct total skips ahead by the tie count
/// (1, 1, 3 rather than 1, 2, 3).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub referral_code: String,
    pub donations_raised: Decimal,
}

/// Aggregate statistics over all ranked entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub total_participants: usize,
    pub total_raised: Decimal,
    /// `totalRaised / totalParticipants`, zero for an empty roster.
    pub average_raised: Decimal,
}

impl LeaderboardSummary {
    pub fn empty() -> Self {
        Self {
            total_participants: 0,
            total_raised: Decimal::ZERO,
            average_raised: Decimal::ZERO,
        }
    }
}

/// Ranked roster plus summary, freshly computed from one roster snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
    pub summary: LeaderboardSummary,
}

impl Leaderboard {
    /// Top three entries, shown when at least three participants exist.
    /// Pure slicing over the already-ranked sequence.
    pub fn podium(&self) -> Option<&[LeaderboardEntry]> {
        if self.entries.len() >= 3 {
            Some(&self.entries[..3])
        } else {
            None
        }
    }
}
