//! Biblio Library Catalog Server
//!
//! A Rust implementation of the Biblio library catalog, providing a REST
//! JSON API for browsing books, authors and categories, searching the
//! catalog, and borrowing and returning physical book copies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
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
