//! Cookie-backed session storage
//!
//! Each visitor gets a uuid session cookie; the values behind it live in an
//! in-memory registry shared through [`AppState`](crate::AppState). The
//! [`Session`] extractor ties the two together and is the concrete
//! [`SessionStore`] the filter handlers write through.

use crate::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use marklet_core::{SessionKey, SessionStore};
use serde_json::Value;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "marklet_session";

struct SessionEntry {
    touched: Instant,
    values: HashMap<SessionKey, Value>,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            touched: Instant::now(),
            values: HashMap::new(),
        }
    }
}

/// In-memory session storage keyed by session id.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl SessionRegistry {
    pub async fn get(&self, id: Uuid, key: SessionKey) -> Option<Value> {
        let sessions = self.inner.read().await;
        sessions.get(&id).and_then(|entry| entry.values.get(&key).cloned())
    }

    pub async fn set(&self, id: Uuid, key: SessionKey, value: Value) {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(id).or_insert_with(SessionEntry::new);
        entry.touched = Instant::now();
        entry.values.insert(key, value);
    }

    pub async fn delete(&self, id: Uuid, key: SessionKey) {
        let mut sessions = self.inner.write().await;
        if let Some(entry) = sessions.get_mut(&id) {
            entry.touched = Instant::now();
            entry.values.remove(&key);
        }
    }

    /// Drop sessions that have not been written to for `max_idle`.
    ///
    /// Returns the number of sessions removed.
    pub async fn purge_stale(&self, max_idle: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.touched.elapsed() < max_idle);
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, "purged stale sessions");
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

/// The calling visitor's session, extracted from the request cookie.
///
/// A request without a (parseable) session cookie gets a fresh id; the
/// matching `Set-Cookie` header is attached to whatever response the
/// handler builds through [`Session::cookie_jar`] or [`Session::redirect`].
pub struct Session {
    id: Uuid,
    fresh: bool,
    registry: SessionRegistry,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Cookie jar carrying the session cookie when this session is new.
    pub fn cookie_jar(&self) -> CookieJar {
        let mut jar = CookieJar::new();
        if self.fresh {
            jar = jar.add(
                Cookie::build((SESSION_COOKIE, self.id.to_string()))
                    .path("/")
                    .http_only(true),
            );
        }
        jar
    }

    /// Build the `302 Found` response every filter operation answers with:
    /// empty body, `Location` as given, session cookie attached if fresh.
    pub fn redirect(&self, location: &str) -> Response {
        (
            StatusCode::FOUND,
            self.cookie_jar(),
            [(header::LOCATION, location)],
            (),
        )
            .into_response()
    }
}

#[async_trait]
impl SessionStore for Session {
    async fn get_parameter(&self, key: SessionKey) -> Option<Value> {
        self.registry.get(self.id, key).await
    }

    async fn set_parameter(&self, key: SessionKey, value: Value) {
        self.registry.set(self.id, key, value).await;
    }

    async fn delete_parameter(&self, key: SessionKey) {
        self.registry.delete(self.id, key).await;
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let existing = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        let (id, fresh) = match existing {
            Some(id) => (id, false),
            None => (Uuid::new_v4(), true),
        };

        Ok(Session {
            id,
            fresh,
            registry: state.sessions.clone(),
        })
    }
}
