use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// Which metric a reward tier is measured against.
///
/// The wire field is named `type` and is absent for donation tiers in the
/// catalog format, so donations is the serde default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    #[default]
    Donations,
    Referrals,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Donations => "donations",
            MetricKind::Referrals => "referrals",
        }
    }
}

/// One entry of the reward catalog. Catalogs are externally supplied
/// configuration, read-only at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardTier {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub metric: MetricKind,
    pub target: Decimal,
}

/// Evaluation result for a single tier: the metric value used, whether the
/// tier is unlocked, and the progress fraction toward it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RewardStatus {
    #[serde(flatten)]
    pub tier: RewardTier,
    pub current_value: Decimal,
    pub unlocked: bool,
    /// Clamped to [0, 100].
    pub progress_percent: Decimal,
}
