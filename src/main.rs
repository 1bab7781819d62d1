//! Paperview - browse conference papers and their nearest neighbours.
//!
//! This is the main entry point for the web server.
//! The application is organized into the following modules:
//!
//! - `models`: Paper records, conference map and page context
//! - `dataset`: Loading the paper collection and answering list views
//! - `pagination`: Incremental render engine with an owned cursor
//! - `filter`: Venue/year filter selection and checkbox panel
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use paperview::config::{Config, ServeArgs};
use paperview::error::AppError;
use paperview::{create_router, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ServeArgs::parse();
    let config = Config::from_args(&args)?;
    let addr = config.addr;

    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Paper server running at http://{}", addr);
    tracing::info!("Dataset: {}", state.config.data_path.display());
    if state.config.include_workshop_papers {
        tracing::info!("Workshop papers: included");
    } else {
        tracing::info!("Workshop papers: hidden (--no-workshop-papers)");
    }

    axum::serve(listener, app).await?;
    Ok(())
}
