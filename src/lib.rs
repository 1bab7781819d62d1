//! Paperview library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes and potential library use.

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod html;
pub mod links;
pub mod models;
pub mod pagination;
pub mod query;
pub mod templates;

use config::Config;
use dataset::Dataset;
use error::AppError;

// ============================================================================
// Cookies
// ============================================================================

/// Cookie remembering the last applied venue filter.
pub const FILTER_COOKIE: &str = "confs";

/// Lifetime of the filter cookie in days.
pub const FILTER_COOKIE_DAYS: i64 = 30;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub config: Config,
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let mut dataset = Dataset::load(&config.data_path)?;
        if !config.include_workshop_papers {
            dataset = dataset.without_workshop_papers();
        }
        tracing::info!(
            papers = dataset.papers().len(),
            venues = dataset.conferences().venues().count(),
            path = %config.data_path.display(),
            "loaded paper dataset"
        );
        Ok(Self { config, dataset })
    }

    pub fn with_dataset(config: Config, dataset: Dataset) -> Self {
        Self { config, dataset }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/api/more", get(handlers::more))
        .route("/{pid}", get(handlers::rank))
        .route("/{pid}/filter", get(handlers::apply_filter))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use filter::{CheckboxKey, FilterPanel, FilterSelection, VenueRow};
pub use models::{ConferenceMap, MoreResponse, Navigation, PageContext, Paper, RenderFormat};
pub use pagination::{PaginationCursor, PaperBlock, RenderBatch, RenderEngine, TerminalMessage};
pub use query::QueryParams;
