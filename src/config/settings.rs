use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub data: DataSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

/// Paths to the JSON snapshot files backing the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    pub users_file: String,
    pub rewards_file: String,
    pub activities_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub recent_activity_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Fund Tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            data: DataSettings {
                users_file: "data/users.json".to_string(),
                rewards_file: "data/rewards.json".to_string(),
                activities_file: "data/activities.json".to_string(),
            },
            display: DisplaySettings {
                currency_symbol: "$".to_string(),
                recent_activity_limit: 5,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FUND_TRACKER"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.display.recent_activity_limit == 0 {
            return Err("Recent activity limit must be at least 1".to_string());
        }
        if self.data.users_file.is_empty() || self.data.rewards_file.is_empty() {
            return Err("Snapshot file paths must be non-empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_activity_limit_rejected() {
        let mut settings = Settings::default();
        settings.display.recent_activity_limit = 0;
        assert!(settings.validate().is_err());
    }
}
