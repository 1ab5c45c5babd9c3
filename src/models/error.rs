use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("invalid reward tier {tier_id}: {reason}")]
    InvalidTier { tier_id: u32, reason: String },

    #[error("invalid metrics for {email}: {reason}")]
    InvalidMetrics { email: String, reason: String },

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
