//! HTTP API server for nanoword.
//!
//! This module provides the game's HTTP API on top of the nanoword library
//! using axum: daily puzzle delivery, share lookup and publishing, JSON
//! error envelopes, and optional static serving of the game UI bundle.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{Config, CorsConfig, LogFormat, LoggingConfig, ServerConfig, StoreConfig};
pub use error::ApiError;
pub use logging::init as init_logging;
pub use routes::router;
pub use state::AppState;
