use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::models::{Activity, Result, RewardTier, TrackerError, UserMetrics};
use crate::rewards::{load_catalog, validate_catalog};
use crate::store::MetricsStore;

#[derive(Deserialize)]
struct UsersFile {
    users: Vec<UserMetrics>,
}

#[derive(Deserialize)]
struct ActivitiesFile {
    activities: Vec<Activity>,
}

/// In-memory store backed by JSON snapshot files (`{"users": [...]}`,
/// `{"rewards": [...]}`, `{"activities": [...]}`).
pub struct MemoryStore {
    users: Vec<UserMetrics>,
    catalog: Vec<RewardTier>,
    activities: Vec<Activity>,
}

impl MemoryStore {
    pub fn new(
        users: Vec<UserMetrics>,
        catalog: Vec<RewardTier>,
        activities: Vec<Activity>,
    ) -> Result<Self> {
        validate_catalog(&catalog)?;
        Ok(Self {
            users,
            catalog,
            activities,
        })
    }

    pub fn from_files<P: AsRef<Path>>(
        users_path: P,
        catalog_path: P,
        activities_path: P,
    ) -> Result<Self> {
        let users: UsersFile = serde_json::from_str(&fs::read_to_string(users_path.as_ref())?)?;
        let catalog = load_catalog(catalog_path.as_ref())?;
        let activities: ActivitiesFile =
            serde_json::from_str(&fs::read_to_string(activities_path.as_ref())?)?;

        info!(
            "Loaded snapshot: {} users, {} tiers, {} activities",
            users.users.len(),
            catalog.len(),
            activities.activities.len()
        );
        Self::new(users.users, catalog, activities.activities)
    }
}

#[async_trait]
impl MetricsStore for MemoryStore {
    async fn fetch_user_metrics(&self, email: &str) -> Result<UserMetrics> {
        let wanted = email.to_lowercase();
        self.users
            .iter()
            .find(|u| u.normalized_email() == wanted)
            .cloned()
            .ok_or_else(|| TrackerError::UserNotFound(email.to_string()))
    }

    async fn fetch_roster(&self) -> Result<Vec<UserMetrics>> {
        Ok(self.users.clone())
    }

    async fn fetch_reward_catalog(&self) -> Result<Vec<RewardTier>> {
        Ok(self.catalog.clone())
    }

    async fn fetch_recent_activity(&self, limit: usize) -> Result<Vec<Activity>> {
        let mut recent = self.activities.clone();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        recent.truncate(limit);
        Ok(recent)
    }
}
