//! API sessions and operations
//!
//! This module holds the [`Session`] type, which authorizes and dispatches
//! requests against the FRIS Solutions API, and the two operations bound to
//! it: cookie generation and hold-captcha solving.

pub mod client;
pub mod generate;

pub use client::{DEFAULT_BASE_URL, Session, SessionBuilder};
