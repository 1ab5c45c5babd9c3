pub mod ranker;
pub mod stats;

pub use ranker::LeaderboardRanker;
pub use stats::{campaign_stats, CampaignStats, DepartmentStats};
