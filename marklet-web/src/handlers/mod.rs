//! HTTP request handlers for the Marklet web server
//!
//! This module contains all the HTTP request handlers organized by functionality.

pub mod health;
pub mod session_filter;

// Re-export all handler functions to keep route definitions short
pub use health::*;
pub use session_filter::*;
