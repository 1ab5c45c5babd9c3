use rust_decimal::Decimal;

use crate::models::{MetricKind, Result, RewardStatus, RewardTier, TrackerError, UserMetrics};

/// Evaluates a user's metrics against a reward catalog.
///
/// Pure and stateless: each tier is checked independently against the same
/// immutable snapshot, so tiers have no ordering dependency and evaluation is
/// safe to run concurrently across invocations.
pub struct RewardEvaluator;

impl RewardEvaluator {
    /// Produces one status per catalog entry, in catalog order.
    ///
    /// A tier with a non-positive target is a deployment defect and fails the
    /// whole call; a malformed catalog never yields partial results.
    pub fn evaluate(metrics: &UserMetrics, catalog: &[RewardTier]) -> Result<Vec<RewardStatus>> {
        metrics.validate()?;
        catalog
            .iter()
            .map(|tier| Self::evaluate_tier(metrics, tier))
            .collect()
    }

    fn evaluate_tier(metrics: &UserMetrics, tier: &RewardTier) -> Result<RewardStatus> {
        if tier.target <= Decimal::ZERO {
            return Err(TrackerError::InvalidTier {
                tier_id: tier.id,
                reason: format!("target must be positive, got {}", tier.target),
            });
        }

        let current_value = match tier.metric {
            MetricKind::Donations => metrics.donations_raised,
            MetricKind::Referrals => Decimal::from(metrics.total_referrals),
        };

        // Inclusive threshold: reaching the target exactly unlocks the tier.
        let unlocked = current_value >= tier.target;
        let progress_percent = (current_value / tier.target * Decimal::ONE_HUNDRED)
            .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

        Ok(RewardStatus {
            tier: tier.clone(),
            current_value,
            unlocked,
            progress_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(raised: i64, referrals: u32) -> UserMetrics {
        UserMetrics {
            email: "jane@example.com".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Smith".to_string()),
            donations_raised: Decimal::from(raised),
            total_referrals: referrals,
            referral_code: None,
            department: None,
        }
    }

    fn tier(id: u32, metric: MetricKind, target: i64) -> RewardTier {
        RewardTier {
            id,
            title: format!("Tier {}", id),
            description: String::new(),
            icon: String::new(),
            category: String::new(),
            metric,
            target: Decimal::from(target),
        }
    }

    #[test]
    fn test_exact_target_unlocks() {
        let statuses = RewardEvaluator::evaluate(
            &user(100, 0),
            &[tier(1, MetricKind::Donations, 100)],
        )
        .unwrap();

        assert!(statuses[0].unlocked);
        assert_eq!(statuses[0].progress_percent, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_halfway_progress() {
        let statuses = RewardEvaluator::evaluate(
            &user(250, 0),
            &[tier(1, MetricKind::Donations, 500)],
        )
        .unwrap();

        assert!(!statuses[0].unlocked);
        assert_eq!(statuses[0].progress_percent, Decimal::from(50));
        assert_eq!(statuses[0].current_value, Decimal::from(250));
    }

    #[test]
    fn test_progress_clamped_at_100() {
        let statuses = RewardEvaluator::evaluate(
            &user(5000, 0),
            &[tier(1, MetricKind::Donations, 100)],
        )
        .unwrap();

        assert_eq!(statuses[0].progress_percent, Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_referral_tier_uses_referral_count() {
        let statuses = RewardEvaluator::evaluate(
            &user(0, 5),
            &[
                tier(1, MetricKind::Referrals, 5),
                tier(2, MetricKind::Referrals, 10),
            ],
        )
        .unwrap();

        assert!(statuses[0].unlocked);
        assert!(!statuses[1].unlocked);
        assert_eq!(statuses[1].progress_percent, Decimal::from(50));
    }

    #[test]
    fn test_zero_metrics_all_locked_at_zero() {
        let catalog = vec![
            tier(1, MetricKind::Donations, 100),
            tier(2, MetricKind::Referrals, 5),
        ];
        let statuses = RewardEvaluator::evaluate(&user(0, 0), &catalog).unwrap();

        assert!(statuses.iter().all(|s| !s.unlocked));
        assert!(statuses
            .iter()
            .all(|s| s.progress_percent == Decimal::ZERO));
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let statuses = RewardEvaluator::evaluate(&user(100, 0), &[]).unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn test_statuses_follow_catalog_order() {
        let catalog = vec![
            tier(6, MetricKind::Donations, 1000),
            tier(2, MetricKind::Donations, 100),
            tier(3, MetricKind::Referrals, 5),
        ];
        let statuses = RewardEvaluator::evaluate(&user(500, 2), &catalog).unwrap();
        let ids: Vec<u32> = statuses.iter().map(|s| s.tier.id).collect();
        assert_eq!(ids, vec![6, 2, 3]);
    }

    #[test]
    fn test_zero_target_is_configuration_error() {
        let err = RewardEvaluator::evaluate(&user(100, 0), &[tier(1, MetricKind::Donations, 0)])
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidTier { tier_id: 1, .. }));
    }

    #[test]
    fn test_negative_donations_fail_evaluation() {
        let mut metrics = user(0, 0);
        metrics.donations_raised = Decimal::from(-50);
        let err = RewardEvaluator::evaluate(&metrics, &[tier(1, MetricKind::Donations, 100)])
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidMetrics { .. }));
    }
}
