use async_trait::async_trait;

use crate::models::{Activity, Result, RewardTier, UserMetrics};

/// Read-only seam to the data store holding user records, the reward
/// catalog, and the activity feed.
///
/// Implementations must hand out internally consistent snapshots; the
/// engines on top never mutate or cache what they are given.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Looks up one participant by email (case-insensitive). A miss is
    /// `UserNotFound` and is propagated unchanged, never replaced with a
    /// zero-valued record.
    async fn fetch_user_metrics(&self, email: &str) -> Result<UserMetrics>;

    /// Full roster snapshot for leaderboard and stats computation.
    async fn fetch_roster(&self) -> Result<Vec<UserMetrics>>;

    /// Externally supplied reward catalog.
    async fn fetch_reward_catalog(&self) -> Result<Vec<RewardTier>>;

    /// Most recent activity records, newest first, at most `limit` of them.
    async fn fetch_recent_activity(&self, limit: usize) -> Result<Vec<Activity>>;
}
