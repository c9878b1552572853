use shared::TierThresholds;

use super::logging::LogLevel;

/// Backend used when `CARD_ANALYSIS_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Application configuration, provided to components through context
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub tier_thresholds: TierThresholds,
    pub log_level: LogLevel,
    /// LocalStorage key holding the logged-in user's number
    pub user_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            tier_thresholds: TierThresholds::CALENDAR,
            log_level: LogLevel::Info,
            user_storage_key: "userNum".to_string(),
        }
    }
}

impl AppConfig {
    /// Default configuration with build-time overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("CARD_ANALYSIS_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = option_env!("CARD_ANALYSIS_LOG_LEVEL").and_then(LogLevel::parse) {
            config.log_level = level;
        }
        config
    }
}
