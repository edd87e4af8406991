//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults,
/// except the weather API key which has no useful default.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// API key for weatherapi.com
    pub weather_api_key: String,
    /// Base URL of the weather API
    pub weather_api_base_url: String,
    /// Cache TTL in seconds, shared by all cached responses
    pub cache_ttl_secs: u64,
    /// Number of forecast days requested upstream
    pub forecast_days: u8,
    /// Number of history records returned by the history endpoint
    pub history_limit: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `WEATHER_API_KEY` - weatherapi.com API key (default: empty)
    /// - `WEATHER_API_BASE_URL` - upstream base URL (default: https://api.weatherapi.com/v1)
    /// - `CACHE_TTL_SECS` - response cache TTL in seconds (default: 1800)
    /// - `FORECAST_DAYS` - forecast length in days (default: 7)
    /// - `HISTORY_LIMIT` - history records returned (default: 10)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            weather_api_key: env::var("WEATHER_API_KEY").unwrap_or_default(),
            weather_api_base_url: env::var("WEATHER_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.weatherapi.com/v1".to_string()),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            forecast_days: env::var("FORECAST_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            history_limit: env::var("HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Returns the cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            weather_api_key: String::new(),
            weather_api_base_url: "https://api.weatherapi.com/v1".to_string(),
            cache_ttl_secs: 1800,
            forecast_days: 7,
            history_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.weather_api_base_url, "https://api.weatherapi.com/v1");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("WEATHER_API_KEY");
        env::remove_var("WEATHER_API_BASE_URL");
        env::remove_var("CACHE_TTL_SECS");
        env::remove_var("FORECAST_DAYS");
        env::remove_var("HISTORY_LIMIT");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert!(config.weather_api_key.is_empty());
        assert_eq!(config.cache_ttl_secs, 1800);
        assert_eq!(config.forecast_days, 7);
        assert_eq!(config.history_limit, 10);
    }

    #[test]
    fn test_cache_ttl_duration() {
        let config = Config::default();
        assert_eq!(config.cache_ttl(), Duration::from_secs(1800));
    }
}
