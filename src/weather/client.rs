//! Weather API Client
//!
//! Talks to the weatherapi.com REST API and flattens its payloads into the
//! response models served to clients.

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{CurrentWeather, ForecastDay};

// == Provider Trait ==
/// Source of weather data, keyed by a free-form city query.
///
/// The HTTP layer depends on this trait rather than on the concrete client
/// so handlers can be exercised against a stub.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for `city`.
    async fn current(&self, city: &str) -> Result<CurrentWeather>;

    /// Fetches a `days`-day forecast for `city`.
    async fn forecast(&self, city: &str, days: u8) -> Result<Vec<ForecastDay>>;
}

// == Weather API Client ==
/// `WeatherProvider` backed by weatherapi.com.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherApiClient {
    /// Creates a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.weather_api_base_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    /// Converts a non-success upstream response into a `WeatherError`,
    /// preserving the status code and the API's own error message when the
    /// body parses.
    async fn upstream_error(response: Response) -> WeatherError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorPayload>()
            .await
            .map(|payload| payload.error.message)
            .unwrap_or_else(|_| "Failed to fetch weather data".to_string());

        WeatherError::Upstream { status, message }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<CurrentWeather> {
        let url = format!("{}/current.json", self.base_url);
        debug!(city, "requesting current conditions upstream");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let payload: ApiCurrentPayload = response.json().await?;
        Ok(payload.into())
    }

    async fn forecast(&self, city: &str, days: u8) -> Result<Vec<ForecastDay>> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = days.to_string();
        debug!(city, days = %days, "requesting forecast upstream");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        let payload: ApiForecastPayload = response.json().await?;
        Ok(payload
            .forecast
            .forecastday
            .into_iter()
            .map(ForecastDay::from)
            .collect())
    }
}

// == Upstream Payload Shapes ==
// Only the fields the response models need; everything else in the payload
// is ignored.

#[derive(Debug, Deserialize)]
struct ApiCurrentPayload {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    condition: ApiCondition,
    humidity: f64,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    vis_km: f64,
    uv: f64,
    feelslike_c: f64,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct ApiForecastPayload {
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: String,
    day: ApiDay,
    #[serde(default)]
    hour: Vec<ApiHour>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ApiCondition,
    daily_chance_of_rain: u8,
    avghumidity: f64,
    maxwind_kph: f64,
    uv: f64,
}

#[derive(Debug, Deserialize)]
struct ApiHour {
    wind_dir: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorPayload {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// == Payload Flattening ==

impl From<ApiCurrentPayload> for CurrentWeather {
    fn from(payload: ApiCurrentPayload) -> Self {
        Self {
            city: payload.location.name,
            country: payload.location.country,
            temperature: payload.current.temp_c,
            condition: payload.current.condition.text,
            humidity: payload.current.humidity,
            wind_speed: payload.current.wind_kph,
            wind_direction: payload.current.wind_dir,
            pressure: payload.current.pressure_mb,
            visibility: payload.current.vis_km,
            uv_index: payload.current.uv,
            icon: payload.current.condition.icon,
            feels_like: payload.current.feelslike_c,
            observation_time: payload.current.last_updated,
        }
    }
}

impl From<ApiForecastDay> for ForecastDay {
    fn from(day: ApiForecastDay) -> Self {
        // Wind direction comes from the midday hour; the day summary has
        // no direction field of its own
        let wind_direction = day
            .hour
            .get(12)
            .or_else(|| day.hour.first())
            .map(|h| h.wind_dir.clone())
            .unwrap_or_default();

        Self {
            date: day.date,
            max_temp: day.day.maxtemp_c,
            min_temp: day.day.mintemp_c,
            condition: day.day.condition.text,
            icon: day.day.condition.icon,
            chance_of_rain: day.day.daily_chance_of_rain,
            humidity: day.day.avghumidity,
            wind_speed: day.day.maxwind_kph,
            wind_direction,
            uv_index: day.day.uv,
        }
    }
}
