//! Session filter handlers
//!
//! Per-visitor display preferences for the bookmark views: links per page,
//! visibility filter, untagged-only filter. Each handler validates or
//! toggles one preference in the session and bounces the visitor back to
//! the referring page with a `302`. Bad input is normalized or clears the
//! filter; none of these operations ever answers with an error status.

use crate::{session::Session, AppState};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use marklet_core::{
    resolve_redirect, toggle_untagged, visibility_action, FilterAction, LoginState, SessionKey,
    SessionStore, Visibility, DEFAULT_LINKS_PER_PAGE,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

fn referer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
}

#[derive(Debug, Deserialize)]
pub struct LinksPerPageQuery {
    pub nb: Option<String>,
}

/// Set the number of links shown per page.
///
/// Absent or malformed `nb` silently falls back to the default.
pub async fn links_per_page(
    Query(query): Query<LinksPerPageQuery>,
    headers: HeaderMap,
    session: Session,
) -> Response {
    let nb = marklet_core::links_per_page(query.nb.as_deref());
    session
        .set_parameter(SessionKey::LinksPerPage, json!(nb))
        .await;
    debug!(links_per_page = nb, "session filter updated");

    session.redirect(&resolve_redirect(referer(&headers)))
}

/// Toggle the visibility filter between private, public, and off.
///
/// Only the logged-in owner may change visibility; anonymous requests leave
/// the session untouched but still redirect.
pub async fn visibility(
    State(state): State<AppState>,
    Path(visibility): Path<String>,
    headers: HeaderMap,
    session: Session,
) -> Response {
    let current = session
        .get_parameter(SessionKey::Visibility)
        .await
        .and_then(|value| value.as_str().and_then(|s| s.parse::<Visibility>().ok()));

    match visibility_action(state.login.is_logged_in(), current, &visibility) {
        FilterAction::Set(value) => {
            session
                .set_parameter(SessionKey::Visibility, json!(value.as_str()))
                .await;
            debug!(visibility = %value, "session filter updated");
        }
        FilterAction::Delete => {
            session.delete_parameter(SessionKey::Visibility).await;
            debug!("visibility filter cleared");
        }
        FilterAction::Noop => {
            debug!("visibility change ignored for anonymous visitor");
        }
    }

    session.redirect(&resolve_redirect(referer(&headers)))
}

/// Flip the untagged-only filter.
pub async fn untagged_only(headers: HeaderMap, session: Session) -> Response {
    let current = session
        .get_parameter(SessionKey::UntaggedOnly)
        .await
        .and_then(|value| value.as_bool());
    let untagged_only = toggle_untagged(current);

    session
        .set_parameter(SessionKey::UntaggedOnly, json!(untagged_only))
        .await;
    debug!(untagged_only, "session filter updated");

    session.redirect(&resolve_redirect(referer(&headers)))
}

/// Effective filter values for the calling session, defaults applied.
#[derive(Debug, Serialize)]
pub struct SessionFilters {
    pub links_per_page: u32,
    pub visibility: Option<Visibility>,
    pub untagged_only: bool,
}

/// Report the filters the bookmark views would render with.
pub async fn session_filters(session: Session) -> Response {
    let links_per_page = session
        .get_parameter(SessionKey::LinksPerPage)
        .await
        .and_then(|value| value.as_u64())
        .map(|n| n as u32)
        .unwrap_or(DEFAULT_LINKS_PER_PAGE);
    let visibility = session
        .get_parameter(SessionKey::Visibility)
        .await
        .and_then(|value| value.as_str().and_then(|s| s.parse::<Visibility>().ok()));
    let untagged_only = session
        .get_parameter(SessionKey::UntaggedOnly)
        .await
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    (
        session.cookie_jar(),
        Json(SessionFilters {
            links_per_page,
            visibility,
            untagged_only,
        }),
    )
        .into_response()
}
