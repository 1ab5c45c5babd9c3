use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One record of the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(flatten)]
    pub detail: ActivityDetail,
}

/// Activity payload, tagged on the wire by a `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ActivityDetail {
    #[serde(rename_all = "camelCase")]
    Donation { amount: Decimal },
    #[serde(rename_all = "camelCase")]
    Referral { referral_name: String },
    #[serde(rename_all = "camelCase")]
    Achievement { achievement: String },
}

impl Activity {
    pub fn headline(&self) -> String {
        match &self.detail {
            ActivityDetail::Donation { amount } => {
                format!("{} raised ${:.2}", self.user, amount)
            }
            ActivityDetail::Referral { referral_name } => {
                format!("{} referred {}", self.user, referral_name)
            }
            ActivityDetail::Achievement { achievement } => {
                format!("{} earned {}", self.user, achievement)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_wire_format() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "id": 1,
                "type": "donation",
                "user": "Sarah Davis",
                "amount": 150.00,
                "timestamp": "2025-01-08T14:30:00Z",
                "description": "Corporate sponsorship secured"
            }"#,
        )
        .unwrap();
        assert_eq!(
            activity.detail,
            ActivityDetail::Donation {
                amount: Decimal::from(150)
            }
        );
        assert_eq!(activity.headline(), "Sarah Davis raised $150.00");
    }

    #[test]
    fn test_referral_activity_wire_format() {
        let activity: Activity = serde_json::from_str(
            r#"{
                "id": 2,
                "type": "referral",
                "user": "Alex Thompson",
                "referralName": "Jennifer Wilson",
                "timestamp": "2025-01-08T13:15:00Z",
                "description": "New volunteer referred"
            }"#,
        )
        .unwrap();
        assert_eq!(activity.headline(), "Alex Thompson referred Jennifer Wilson");
    }
}
