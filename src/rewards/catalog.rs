use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::models::{Result, RewardTier, TrackerError};

#[derive(Deserialize)]
struct CatalogFile {
    rewards: Vec<RewardTier>,
}

/// Loads the reward catalog from a JSON snapshot (`{"rewards": [...]}`) and
/// validates it.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<RewardTier>> {
    let raw = fs::read_to_string(path.as_ref())?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    validate_catalog(&file.rewards)?;
    info!("Loaded reward catalog with {} tiers", file.rewards.len());
    Ok(file.rewards)
}

/// A malformed catalog is a deployment defect: fail loudly at load time
/// rather than during evaluation.
pub fn validate_catalog(catalog: &[RewardTier]) -> Result<()> {
    let mut seen = HashSet::new();
    for tier in catalog {
        if tier.target <= Decimal::ZERO {
            return Err(TrackerError::InvalidTier {
                tier_id: tier.id,
                reason: format!("target must be positive, got {}", tier.target),
            });
        }
        if !seen.insert(tier.id) {
            return Err(TrackerError::InvalidTier {
                tier_id: tier.id,
                reason: "duplicate tier id".to_string(),
            });
        }
    }
    Ok(())
}
