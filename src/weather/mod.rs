//! Weather Module
//!
//! Upstream weather data access behind the `WeatherProvider` trait.

mod client;

pub use client::{WeatherApiClient, WeatherProvider};
