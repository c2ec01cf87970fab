//! Route definitions for the Marklet web server
//!
//! This module defines all the routes for the web application.

use crate::{handlers, AppState};
use axum::{routing::get, Router};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Render-time view of the session filters
        .route("/session/filters", get(handlers::session_filters))
}

/// Create session filter routes
pub fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/links-per-page", get(handlers::links_per_page))
        .route("/visibility/{visibility}", get(handlers::visibility))
        .route("/untagged-only", get(handlers::untagged_only))
}
