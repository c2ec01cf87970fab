//! Marklet Core - Domain logic for the Marklet bookmarking service
//!
//! This crate holds the pure decision logic behind the session filter
//! controls (links-per-page, visibility, untagged-only) together with the
//! collaborator traits the web layer wires up.

pub mod filter;
pub mod redirect;
pub mod session;

pub use filter::*;
pub use redirect::*;
pub use session::*;
