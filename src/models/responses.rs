//! Response DTOs for the weather proxy API
//!
//! Defines the structure of outgoing HTTP response bodies. The weather
//! shapes flatten the upstream payload into the fields the frontend cards
//! actually render.

use serde::Serialize;

/// Current conditions for one location
/// (GET /api/weather/current)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    /// Resolved location name
    pub city: String,
    /// Country of the resolved location
    pub country: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Condition text, e.g. "Partly cloudy"
    pub condition: String,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Compass wind direction, e.g. "NW"
    pub wind_direction: String,
    /// Pressure in millibars
    pub pressure: f64,
    /// Visibility in km
    pub visibility: f64,
    /// UV index
    pub uv_index: f64,
    /// Condition icon URL
    pub icon: String,
    /// Apparent temperature in °C
    pub feels_like: f64,
    /// Upstream observation time
    pub observation_time: String,
}

/// One day of the forecast
/// (GET /api/weather/forecast returns a list of these)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Forecast date, YYYY-MM-DD
    pub date: String,
    /// Daily maximum temperature in °C
    pub max_temp: f64,
    /// Daily minimum temperature in °C
    pub min_temp: f64,
    /// Condition text for the day
    pub condition: String,
    /// Condition icon URL
    pub icon: String,
    /// Chance of rain in percent
    pub chance_of_rain: u8,
    /// Average humidity in percent
    pub humidity: f64,
    /// Maximum wind speed in km/h
    pub wind_speed: f64,
    /// Midday compass wind direction
    pub wind_direction: String,
    /// UV index
    pub uv_index: f64,
}

/// Response body for the history clear operation (DELETE /api/weather/history)
#[derive(Debug, Clone, Serialize)]
pub struct HistoryClearedResponse {
    /// Success message
    pub message: String,
}

impl HistoryClearedResponse {
    /// Creates a new HistoryClearedResponse
    pub fn new() -> Self {
        Self {
            message: "Search history cleared successfully".to_string(),
        }
    }
}

impl Default for HistoryClearedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the cache flush operation (DELETE /api/cache)
#[derive(Debug, Clone, Serialize)]
pub struct CacheFlushedResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped across all caches
    pub entries_removed: usize,
}

impl CacheFlushedResponse {
    /// Creates a new CacheFlushedResponse
    pub fn new(entries_removed: usize) -> Self {
        Self {
            message: "Cache flushed successfully".to_string(),
            entries_removed,
        }
    }
}

/// Response body for the health endpoint (GET /api/health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
