//! Login state handle
//!
//! Marklet is a single-account service; the filter controller only needs to
//! know whether that account is currently signed in. The actual login flow
//! lives outside this crate, which is why the handle is just a shared flag
//! behind the [`LoginState`] trait.

use marklet_core::LoginState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared, cheaply clonable login flag.
#[derive(Clone, Default)]
pub struct SharedLoginState {
    logged_in: Arc<AtomicBool>,
}

impl SharedLoginState {
    pub fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.store(logged_in, Ordering::Relaxed);
    }
}

impl LoginState for SharedLoginState {
    fn is_logged_in(&self) -> bool {
        self.logged_in.load(Ordering::Relaxed)
    }
}
