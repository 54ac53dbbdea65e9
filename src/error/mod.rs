//! Error handling for the PerimeterX API client
//!
//! This module defines the error types returned by session construction and
//! the API operations.

pub mod types;

pub use types::{Error, Result};
