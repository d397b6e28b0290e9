//! ASM Equipment Schedule Server
//!
//! REST JSON API for planning construction equipment across job sites,
//! one week at a time: equipment, locations, schedule entries and the
//! rendered weekly grid.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod grid;
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
}
