//! UniAdvisor campus server
//!
//! REST JSON API for lessons, geofenced lecture check-in with a lazily reset
//! daily occupancy counter, and campus navigation.

use std::sync::Arc;

pub mod api;
pub mod checkin;
pub mod config;
pub mod error;
pub mod geo;
pub mod identity;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub identity: Arc<dyn identity::IdentityVerifier>,
}
