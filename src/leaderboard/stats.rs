use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Result, UserMetrics};

/// Campaign-wide statistics over the full roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStats {
    pub total_users: usize,
    pub total_donations: Decimal,
    pub total_referrals: u64,
    pub average_donation: Decimal,
    pub departments: BTreeMap<String, DepartmentStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub count: usize,
    pub donations: Decimal,
}

/// Computes campaign statistics from a validated roster snapshot.
/// Records without a department land in the `Unknown` bucket.
pub fn campaign_stats(roster: &[UserMetrics]) -> Result<CampaignStats> {
    for metrics in roster {
        metrics.validate()?;
    }

    let total_users = roster.len();
    let total_donations: Decimal = roster.iter().map(|m| m.donations_raised).sum();
    let total_referrals: u64 = roster.iter().map(|m| u64::from(m.total_referrals)).sum();
    let average_donation = if total_users > 0 {
        total_donations / Decimal::from(total_users as u64)
    } else {
        Decimal::ZERO
    };

    let mut departments: BTreeMap<String, DepartmentStats> = BTreeMap::new();
    for metrics in roster {
        let dept = metrics
            .department
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        let entry = departments.entry(dept).or_default();
        entry.count += 1;
        entry.donations += metrics.donations_raised;
    }

    Ok(CampaignStats {
        total_users,
        total_donations,
        total_referrals,
        average_donation,
        departments,
    })
}
