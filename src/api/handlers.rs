//! API Handlers
//!
//! HTTP request handlers for each weather proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::{debug, info};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::history::{HistoryStore, SearchRecord};
use crate::models::{
    CacheFlushedResponse, CurrentWeather, ForecastDay, HealthResponse, HistoryClearedResponse,
    WeatherQuery,
};
use crate::weather::{WeatherApiClient, WeatherProvider};

/// Application state shared across all handlers.
///
/// Holds one cache per endpoint shape, the search history, and the upstream
/// provider. Everything is constructor-injected; there is no ambient global
/// cache. The caches sit behind `Arc<RwLock<>>` so the read-then-delete
/// expiry sequence inside `get` is a critical section.
#[derive(Clone)]
pub struct AppState {
    /// Cached current-conditions responses, keyed by normalized city
    pub current_cache: Arc<RwLock<ExpiringCache<CurrentWeather>>>,
    /// Cached forecast responses, keyed by normalized city
    pub forecast_cache: Arc<RwLock<ExpiringCache<Vec<ForecastDay>>>>,
    /// Search history of successful current-conditions lookups
    pub history: Arc<RwLock<HistoryStore>>,
    /// Upstream weather data source
    pub provider: Arc<dyn WeatherProvider>,
    /// Records returned by the history endpoint
    pub history_limit: usize,
    /// Forecast length requested upstream
    pub forecast_days: u8,
}

impl AppState {
    /// Creates a new AppState with the given provider and configuration.
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &Config) -> Self {
        Self {
            current_cache: Arc::new(RwLock::new(ExpiringCache::new(config.cache_ttl()))),
            forecast_cache: Arc::new(RwLock::new(ExpiringCache::new(config.cache_ttl()))),
            history: Arc::new(RwLock::new(HistoryStore::default())),
            provider,
            history_limit: config.history_limit,
            forecast_days: config.forecast_days,
        }
    }

    /// Creates a new AppState from configuration, wired to the real
    /// weatherapi.com client.
    pub fn from_config(config: &Config) -> Self {
        let provider = Arc::new(WeatherApiClient::new(config));
        Self::new(provider, config)
    }
}

/// Handler for GET /api/weather/current?city=
///
/// Serves current conditions from the cache when a fresh entry exists;
/// otherwise fetches upstream, caches the result, and records the lookup in
/// the search history.
pub async fn current_weather_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<CurrentWeather>> {
    // Validate request
    if let Some(error_msg) = query.validate() {
        return Err(WeatherError::InvalidCity(error_msg));
    }

    let key = query.cache_key();

    // Write lock: a read may purge an expired entry
    if let Some(cached) = state.current_cache.write().await.get(&key) {
        debug!(city = %key, "current conditions served from cache");
        return Ok(Json(cached));
    }

    let weather = state.provider.current(query.city()).await?;
    info!(city = %key, "fetched current conditions from upstream");

    state.current_cache.write().await.set(key, weather.clone());
    state.history.write().await.record(SearchRecord::new(
        weather.city.clone(),
        weather.temperature,
        weather.condition.clone(),
    ));

    Ok(Json(weather))
}

/// Handler for GET /api/weather/forecast?city=
///
/// Same cache-then-upstream flow as current conditions, against a separate
/// cache. Forecast lookups are not recorded in the search history.
pub async fn forecast_handler(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Vec<ForecastDay>>> {
    if let Some(error_msg) = query.validate() {
        return Err(WeatherError::InvalidCity(error_msg));
    }

    let key = query.cache_key();

    if let Some(cached) = state.forecast_cache.write().await.get(&key) {
        debug!(city = %key, "forecast served from cache");
        return Ok(Json(cached));
    }

    let forecast = state
        .provider
        .forecast(query.city(), state.forecast_days)
        .await?;
    info!(city = %key, days = state.forecast_days, "fetched forecast from upstream");

    state.forecast_cache.write().await.set(key, forecast.clone());

    Ok(Json(forecast))
}

/// Handler for GET /api/weather/history
///
/// Returns the most recent lookups, newest first.
pub async fn history_handler(State(state): State<AppState>) -> Json<Vec<SearchRecord>> {
    let history = state.history.read().await;
    Json(history.recent(state.history_limit))
}

/// Handler for DELETE /api/weather/history
///
/// Clears the search history.
pub async fn clear_history_handler(State(state): State<AppState>) -> Json<HistoryClearedResponse> {
    state.history.write().await.clear();
    info!("search history cleared");

    Json(HistoryClearedResponse::new())
}

/// Handler for DELETE /api/cache
///
/// Flushes both response caches, reporting how many entries were dropped.
pub async fn flush_cache_handler(State(state): State<AppState>) -> Json<CacheFlushedResponse> {
    let mut removed = 0;

    {
        let mut cache = state.current_cache.write().await;
        removed += cache.len();
        cache.clear();
    }
    {
        let mut cache = state.forecast_cache.write().await;
        removed += cache.len();
        cache.clear();
    }

    info!(entries_removed = removed, "response caches flushed");
    Json(CacheFlushedResponse::new(removed))
}

/// Handler for GET /api/health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Fallback handler for unknown routes.
pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
