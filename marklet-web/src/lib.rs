//! Marklet Web Server
//!
//! This crate provides the HTTP surface of Marklet: session-scoped filter
//! controls for the bookmark views, served by Axum.

pub mod auth;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;

// Re-export main types
pub use server::MarkletServer;
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // API routes
        .nest("/api", routes::api_routes())
        // Filter controls, mounted at the root so referring pages can link
        // to them directly
        .merge(routes::filter_routes())
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("MARKLET_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("MARKLET_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dev_mode: std::env::var("MARKLET_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        }
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marklet_web=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
