//! Library Ledger
//!
//! An in-memory ledger of books, members and loans with a REST JSON API
//! in front of it. Nothing is persisted: a restart yields a fresh ledger.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use ledger::Ledger;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build services from configuration
    pub fn new(config: AppConfig) -> Self {
        let services = services::Services::new(&config.ledger);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
