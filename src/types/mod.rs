//! Type definitions for the PerimeterX API client
//!
//! This module contains the main data structures used for requests and
//! responses on the wire.

pub mod request;
pub mod response;

pub use request::GenerateRequest;
pub use response::{ErrorResponse, GenerateResponse};
