//! Request DTOs for the weather proxy API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the weather lookup endpoints
/// (GET /api/weather/current and GET /api/weather/forecast)
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherQuery {
    /// City name or location identifier to look up
    pub city: String,
}

impl WeatherQuery {
    /// Validates the query parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.city.trim().is_empty() {
            return Some("Valid city parameter is required".to_string());
        }
        None
    }

    /// Returns the city as sent upstream, with surrounding whitespace removed.
    pub fn city(&self) -> &str {
        self.city.trim()
    }

    /// Returns the normalized cache key for this query.
    ///
    /// "London", " london " and "LONDON" all memoize under the same entry.
    pub fn cache_key(&self) -> String {
        self.city.trim().to_lowercase()
    }
}
