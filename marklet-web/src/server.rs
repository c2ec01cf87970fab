//! Marklet Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};

/// How long an untouched session survives before the purge task drops it.
const SESSION_MAX_IDLE: Duration = Duration::from_secs(24 * 3600);

/// Main Marklet web server
pub struct MarkletServer {
    config: WebConfig,
    state: AppState,
}

impl MarkletServer {
    /// Create a new Marklet server
    pub fn new(config: WebConfig) -> Self {
        let state = AppState::new(config.clone());

        Self { config, state }
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting Marklet Web Server");
        info!("📍 Server address: http://{}", address);
        info!("🔧 Development mode: {}", self.config.dev_mode);

        // Create the application
        let app = create_app(self.state.clone());

        // Create TCP listener
        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        // Start cleanup task for stale sessions
        let cleanup_state = self.state.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(3600)); // Every hour
            loop {
                interval.tick().await;
                cleanup_state.sessions.purge_stale(SESSION_MAX_IDLE).await;
            }
        });

        // Start the server
        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for MarkletServer
pub struct MarkletServerBuilder {
    config: WebConfig,
}

impl MarkletServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Build the server
    pub fn build(self) -> MarkletServer {
        MarkletServer::new(self.config)
    }
}

impl Default for MarkletServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
