//! API Routes
//!
//! Configures the Axum router with all weather proxy endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_history_handler, current_weather_handler, flush_cache_handler, forecast_handler,
    health_handler, history_handler, not_found_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/health` - Health check endpoint
/// - `GET /api/weather/current?city=` - Current conditions for a city
/// - `GET /api/weather/forecast?city=` - Multi-day forecast for a city
/// - `GET /api/weather/history` - Recent lookups, newest first
/// - `DELETE /api/weather/history` - Clear the search history
/// - `DELETE /api/cache` - Flush the response caches
///
/// # Middleware
/// - CORS: Allows any origin so the frontend can be served from anywhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/weather/current", get(current_weather_handler))
        .route("/api/weather/forecast", get(forecast_handler))
        .route(
            "/api/weather/history",
            get(history_handler).delete(clear_history_handler),
        )
        .route("/api/cache", delete(flush_cache_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::Result;
    use crate::models::{CurrentWeather, ForecastDay};
    use crate::weather::WeatherProvider;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::util::ServiceExt;

    struct EmptyProvider;

    #[async_trait]
    impl WeatherProvider for EmptyProvider {
        async fn current(&self, city: &str) -> Result<CurrentWeather> {
            Ok(CurrentWeather {
                city: city.to_string(),
                country: "Testland".to_string(),
                temperature: 10.0,
                condition: "Clear".to_string(),
                humidity: 50.0,
                wind_speed: 5.0,
                wind_direction: "N".to_string(),
                pressure: 1010.0,
                visibility: 10.0,
                uv_index: 1.0,
                icon: "//icon.png".to_string(),
                feels_like: 10.0,
                observation_time: "2024-05-01 12:00".to_string(),
            })
        }

        async fn forecast(&self, _city: &str, _days: u8) -> Result<Vec<ForecastDay>> {
            Ok(Vec::new())
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::new(Arc::new(EmptyProvider), &Config::default());
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_current_endpoint_requires_city() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/weather/current")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Missing query string fails extraction
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_current_endpoint_success() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/weather/current?city=London")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_falls_back_to_404() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
