//! # Novena Backend
//!
//! Tracks novenas and the donations registered against them.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (HTML pages, JSON API)
//!     ↓
//! Domain Layer (NovenaService, NovenaStore)
//!     ↓
//! Storage Layer (JSON backing file)
//! ```
//!
//! The whole collection lives in memory. It is loaded once at startup and
//! written back in full after every change.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::NovenaService;
use crate::storage::{Connection, JsonConnection};

/// Main application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub novena_service: NovenaService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage at {}", config.data_file.display());
    let connection = JsonConnection::new(&config.data_file)?;
    let repository = Arc::new(connection.create_novena_repository());

    info!("Setting up domain model");
    let novena_service = NovenaService::open(repository);

    Ok(AppState { novena_service })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/novenas", get(io::list_novenas).post(io::create_novena))
        .route("/novenas/:id", get(io::get_novena))
        .route("/donations", post(io::create_donation));

    Router::new()
        .route("/", get(io::home))
        .route("/list", get(io::list_page))
        .route("/novena-cad", get(io::novena_form).post(io::submit_novena))
        .route("/donation-cad", get(io::donation_form).post(io::submit_donation))
        .route("/print-novena/:id", get(io::print_novena))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
