use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

use crate::models::{Result, TrackerError};

/// Point-in-time snapshot of one participant's fundraising metrics.
///
/// Snapshots come from the data store and are never mutated by the engine;
/// every derived view is recomputed fresh from the current snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub donations_raised: Decimal,
    #[serde(default)]
    pub total_referrals: u32,
    #[serde(default)]
    pub referral_code: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

impl UserMetrics {
    /// Rejects malformed snapshots before they reach any computation.
    ///
    /// A negative donation total indicates data corruption upstream and fails
    /// the whole operation rather than being silently coerced to zero.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(TrackerError::InvalidMetrics {
                email: "<empty>".to_string(),
                reason: "email must be non-empty".to_string(),
            });
        }
        if self.donations_raised.is_sign_negative() {
            return Err(TrackerError::InvalidMetrics {
                email: self.email.clone(),
                reason: format!("donationsRaised is negative: {}", self.donations_raised),
            });
        }
        Ok(())
    }

    /// Emails compare case-insensitively; stored casing is kept for display.
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }

    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => "Intern".to_string(),
        }
    }

    /// Stored referral code, or the generated fallback `{first}{last}2025`.
    pub fn referral_code(&self) -> String {
        if let Some(code) = &self.referral_code {
            return code.clone();
        }
        let name = match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{}{}", first, last),
            _ => "intern".to_string(),
        };
        format!("{}2025", name.to_lowercase())
    }
}
