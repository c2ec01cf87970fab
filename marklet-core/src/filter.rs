//! Session filter decision logic
//!
//! Every branch of the filter protocol lives here as pure functions so the
//! web layer only has to apply the resulting action to a session store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Links-per-page value applied when the request carries no usable `nb`.
pub const DEFAULT_LINKS_PER_PAGE: u32 = 20;

/// Bookmark visibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown visibility: {0}")]
pub struct ParseVisibilityError(String);

impl FromStr for Visibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Visibility::Private),
            "public" => Ok(Visibility::Public),
            other => Err(ParseVisibilityError(other.to_string())),
        }
    }
}

/// Outcome of a visibility filter request, applied by the caller against
/// its session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    /// Store the requested visibility.
    Set(Visibility),
    /// Remove the visibility filter from the session.
    Delete,
    /// Leave the session untouched.
    Noop,
}

/// Parse the raw `nb` query parameter into a links-per-page value.
///
/// Absent, malformed, zero, and negative inputs all fall back to
/// [`DEFAULT_LINKS_PER_PAGE`]; bad input is normalized, never an error.
pub fn links_per_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_LINKS_PER_PAGE)
}

/// Decide what a visibility filter request does to the session.
///
/// Visibility is only adjustable while logged in; logged-out requests are a
/// no-op. An unrecognized value clears the filter. Requesting the value
/// already stored toggles the filter off, any other recognized value
/// replaces it.
pub fn visibility_action(
    logged_in: bool,
    current: Option<Visibility>,
    requested: &str,
) -> FilterAction {
    if !logged_in {
        return FilterAction::Noop;
    }

    match requested.parse::<Visibility>() {
        Err(_) => FilterAction::Delete,
        Ok(requested) => {
            if current == Some(requested) {
                FilterAction::Delete
            } else {
                FilterAction::Set(requested)
            }
        }
    }
}

/// Flip the untagged-only flag; an absent value counts as `false`.
pub fn toggle_untagged(current: Option<bool>) -> bool {
    !current.unwrap_or(false)
}
