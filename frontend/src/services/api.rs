use gloo::net::http::Request;
use shared::{decode_daily_statistics, DailyStatisticRecord, StatisticsFetchError};

use super::config::DEFAULT_API_BASE_URL;

/// API client for the card analysis backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn daily_statistics_url(&self, user_num: u64) -> String {
        format!("{}/api/daily-statistics/{}", self.base_url, user_num)
    }

    /// Get every daily spending record of a user
    pub async fn fetch_daily_statistics(
        &self,
        user_num: u64,
    ) -> Result<Vec<DailyStatisticRecord>, StatisticsFetchError> {
        let url = self.daily_statistics_url(user_num);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| StatisticsFetchError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| StatisticsFetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(StatisticsFetchError::Status {
                status: response.status(),
                message: body,
            });
        }

        decode_daily_statistics(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_daily_statistics_url() {
        let client = ApiClient::with_base_url("https://api.example.com/".to_string());
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.daily_statistics_url(42),
            "https://api.example.com/api/daily-statistics/42"
        );
    }

    #[wasm_bindgen_test]
    fn test_default_base_url() {
        assert_eq!(ApiClient::default().base_url(), "http://localhost:8080");
    }
}
