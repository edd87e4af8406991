//! Error types for the weather proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Weather Error Enum ==
/// Unified error type for the weather proxy.
///
/// The cache contributes nothing here: its operations are total. Every
/// variant belongs to the request-handling layer.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Missing or blank city parameter
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    /// The weather API answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Transport-level failure talking to the weather API
    #[error("Weather API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WeatherError::InvalidCity(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Re-emit the upstream status so an unknown city surfaces as the
            // weather API reported it
            WeatherError::Upstream { status, message } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                message.clone(),
            ),
            WeatherError::Request(_) => (
                StatusCode::BAD_GATEWAY,
                "Failed to fetch weather data".to_string(),
            ),
            WeatherError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather proxy.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_city_maps_to_400() {
        let response = WeatherError::InvalidCity("City cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_keeps_status() {
        let response = WeatherError::Upstream {
            status: 404,
            message: "No matching location found.".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_error_invalid_status_falls_back() {
        let response = WeatherError::Upstream {
            status: 42,
            message: "weird".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = WeatherError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
