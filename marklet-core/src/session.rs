//! Collaborator traits at the session boundary
//!
//! The filter controller never owns session storage or login state; it
//! talks to both through these traits and the web layer injects concrete
//! implementations.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

/// Named slots a visitor session can hold for the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    LinksPerPage,
    Visibility,
    UntaggedOnly,
}

impl SessionKey {
    /// Stable storage name for the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::LinksPerPage => "links_per_page",
            SessionKey::Visibility => "visibility",
            SessionKey::UntaggedOnly => "untagged_only",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-visitor key/value state surviving across requests.
///
/// Values are JSON so a slot can hold an integer, a string, or a boolean
/// without the store caring which filter it belongs to.
#[async_trait]
pub trait SessionStore {
    async fn get_parameter(&self, key: SessionKey) -> Option<Value>;
    async fn set_parameter(&self, key: SessionKey, value: Value);
    async fn delete_parameter(&self, key: SessionKey);
}

/// Login state of the visitor owning the current session.
pub trait LoginState {
    fn is_logged_in(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_have_distinct_storage_names() {
        let keys = [
            SessionKey::LinksPerPage,
            SessionKey::Visibility,
            SessionKey::UntaggedOnly,
        ];
        for a in keys {
            for b in keys {
                assert_eq!(a == b, a.as_str() == b.as_str());
            }
        }
    }
}
