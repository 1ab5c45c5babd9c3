pub mod models;
pub mod config;
pub mod rewards;
pub mod leaderboard;
pub mod store;
pub mod dashboard;

pub use models::{
    Leaderboard, LeaderboardEntry, LeaderboardSummary, MetricKind, Result, RewardStatus,
    RewardTier, TrackerError, UserMetrics,
};
pub use config::Settings;
pub use leaderboard::LeaderboardRanker;
pub use rewards::RewardEvaluator;

// Re-export commonly used types
pub use rust_decimal::Decimal;
