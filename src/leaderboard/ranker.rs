use rust_decimal::Decimal;

use crate::models::{Leaderboard, LeaderboardEntry, LeaderboardSummary, Result, UserMetrics};

/// Ranks a roster snapshot by donations raised.
///
/// Pure and single-pass: consumes the roster as an immutable borrow and
/// produces a freshly allocated leaderboard. Nothing is cached between calls.
pub struct LeaderboardRanker;

impl LeaderboardRanker {
    /// Ranks the full roster and computes aggregate statistics.
    ///
    /// Ordering is donations descending; equal totals share a rank
    /// (competition ranking, `[500, 500, 300]` yields ranks `[1, 1, 3]`) and are
    /// displayed in email order so output is deterministic. Every entry is
    /// validated up front; one malformed record fails the whole ranking
    /// rather than producing a partially-correct leaderboard.
    pub fn rank(roster: &[UserMetrics]) -> Result<Leaderboard> {
        for metrics in roster {
            metrics.validate()?;
        }

        let mut ordered: Vec<&UserMetrics> = roster.iter().collect();
        ordered.sort_by(|a, b| {
            b.donations_raised
                .cmp(&a.donations_raised)
                .then_with(|| a.normalized_email().cmp(&b.normalized_email()))
        });

        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(ordered.len());
        for (position, metrics) in ordered.iter().enumerate() {
            // Tied totals inherit the rank of the previous entry; the next
            // distinct total resumes at its 1-based position.
            let rank = match entries.last() {
                Some(prev) if prev.donations_raised == metrics.donations_raised => prev.rank,
                _ => position as u32 + 1,
            };
            entries.push(LeaderboardEntry {
                rank,
                email: metrics.email.clone(),
                first_name: metrics.first_name.clone(),
                last_name: metrics.last_name.clone(),
                referral_code: metrics.referral_code(),
                donations_raised: metrics.donations_raised,
            });
        }

        let summary = Self::summarize(roster);
        Ok(Leaderboard { entries, summary })
    }

    fn summarize(roster: &[UserMetrics]) -> LeaderboardSummary {
        let total_participants = roster.len();
        if total_participants == 0 {
            return LeaderboardSummary::empty();
        }

        // Exact decimal sum; rounding is a display concern.
        let total_raised: Decimal = roster.iter().map(|m| m.donations_raised).sum();
        let average_raised = total_raised / Decimal::from(total_participants as u64);

        LeaderboardSummary {
            total_participants,
            total_raised,
            average_raised,
        }
    }
}
