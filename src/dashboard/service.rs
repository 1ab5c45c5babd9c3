use std::sync::Arc;

use futures::try_join;
use tracing::info;

use crate::{
    leaderboard::{campaign_stats, CampaignStats, LeaderboardRanker},
    models::{Activity, Leaderboard, Result, RewardStatus},
    rewards::RewardEvaluator,
    store::MetricsStore,
};

/// Glue between the data store and the pure engines.
///
/// Fetches one consistent snapshot per request and hands it to the
/// evaluator/ranker; holds no state of its own between calls.
pub struct DashboardService {
    store: Arc<dyn MetricsStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn MetricsStore>) -> Self {
        Self { store }
    }

    /// Reward statuses for one participant, in catalog order.
    pub async fn reward_progress(&self, email: &str) -> Result<Vec<RewardStatus>> {
        info!("Evaluating rewards for {}", email);
        let (metrics, catalog) = try_join!(
            self.store.fetch_user_metrics(email),
            self.store.fetch_reward_catalog(),
        )?;

        let statuses = RewardEvaluator::evaluate(&metrics, &catalog)?;
        info!(
            "{} has unlocked {}/{} tiers",
            email,
            statuses.iter().filter(|s| s.unlocked).count(),
            statuses.len()
        );
        Ok(statuses)
    }

    /// Ranked leaderboard over the full roster.
    pub async fn leaderboard(&self) -> Result<Leaderboard> {
        let roster = self.store.fetch_roster().await?;
        info!("Ranking {} participants", roster.len());
        LeaderboardRanker::rank(&roster)
    }

    pub async fn campaign_stats(&self) -> Result<CampaignStats> {
        let roster = self.store.fetch_roster().await?;
        campaign_stats(&roster)
    }

    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<Activity>> {
        self.store.fetch_recent_activity(limit).await
    }
}
