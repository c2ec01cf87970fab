//! Integration test helpers
//!
//! Spins up a full application on a random port and drives it through a
//! reqwest client that keeps cookies but never follows redirects, so the
//! 302 responses of the filter endpoints can be asserted directly.

use std::sync::LazyLock;
use tokio::net::TcpListener;
use marklet_web::{AppState, WebConfig};

// Make sure tracing is only initialized once
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
});

/// A running test application
pub struct TestApp {
    pub address: String,
    pub state: AppState,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Sign the instance owner in or out
    pub fn log_in(&self) {
        self.state.login.set_logged_in(true);
    }

    pub fn log_out(&self) {
        self.state.login.set_logged_in(false);
    }

    /// Request a links-per-page change
    pub async fn get_links_per_page(
        &self,
        nb: Option<&str>,
        referer: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .api_client
            .get(format!("{}/links-per-page", &self.address));
        if let Some(nb) = nb {
            request = request.query(&[("nb", nb)]);
        }
        if let Some(referer) = referer {
            request = request.header("Referer", referer);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Request a visibility filter change
    pub async fn get_visibility(&self, visibility: &str, referer: Option<&str>) -> reqwest::Response {
        let mut request = self
            .api_client
            .get(format!("{}/visibility/{}", &self.address, visibility));
        if let Some(referer) = referer {
            request = request.header("Referer", referer);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Flip the untagged-only filter
    pub async fn get_untagged_only(&self, referer: Option<&str>) -> reqwest::Response {
        let mut request = self
            .api_client
            .get(format!("{}/untagged-only", &self.address));
        if let Some(referer) = referer {
            request = request.header("Referer", referer);
        }
        request.send().await.expect("Failed to execute request.")
    }

    /// Effective filter values for the client's session, as the render
    /// layer would see them
    pub async fn get_session_filters(&self) -> serde_json::Value {
        self.api_client
            .get(format!("{}/api/session/filters", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .json()
            .await
            .expect("Failed to parse session filters.")
    }

    /// Health check
    pub async fn get_health(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawn a test application on a random port
pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let config = WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0, // Let the OS choose a free port
        dev_mode: true,
    };

    let state = AppState::new(config);
    let app = marklet_web::create_app(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        state,
        api_client: client,
    }
}

/// Assert the response is a 302 redirect to the given location
pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
