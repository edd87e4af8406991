//! Weather Proxy - A weather lookup backend
//!
//! Proxies the weatherapi.com REST API behind an in-memory TTL response
//! cache and keeps a bounded search history.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod weather;

pub use api::AppState;
pub use config::Config;
