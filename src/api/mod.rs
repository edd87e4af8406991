//! API Module
//!
//! HTTP handlers and routing for the weather proxy REST API.
//!
//! # Endpoints
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/weather/current?city=` - Current conditions for a city
//! - `GET /api/weather/forecast?city=` - Multi-day forecast for a city
//! - `GET /api/weather/history` - Recent lookups, newest first
//! - `DELETE /api/weather/history` - Clear the search history
//! - `DELETE /api/cache` - Flush the response caches

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
