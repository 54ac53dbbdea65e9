//! FRIS Solutions PerimeterX API client
//!
//! A small async SDK for the FRIS Solutions API, which generates PerimeterX
//! sensor cookies and solves the associated hold-captcha challenge flow.
//!
//! # Architecture
//!
//! The crate has exactly two moving parts:
//! - [`Session`] holds the API key and a reusable HTTP transport. Re-use the
//!   same session across calls (and tasks) to benefit from connection pooling.
//! - Two operations bound to the session: [`Session::generate_cookie`] and
//!   [`Session::solve_hold_captcha`]. Each is a single request/response
//!   exchange with no retained state.
//!
//! # Usage
//!
//! ```rust
//! use px_sdk::{GenerateRequest, Session};
//!
//! # async fn example() -> px_sdk::Result<()> {
//! let session = Session::new("my-api-key");
//!
//! let request = GenerateRequest::new(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36",
//!     "https://auth.ticketmaster.com/",
//! );
//!
//! let sensor = session.generate_cookie(&request).await?;
//! println!("cookie: {}", sensor.cookie);
//!
//! // If the sensor was flagged, chain into the hold-captcha flow using the
//! // `data` value from the generate response headers.
//! if let Some(data) = sensor.data_header() {
//!     let hold = session
//!         .solve_hold_captcha(&request.clone().with_data(data))
//!         .await?;
//!     println!("refined cookie: {}", hold.cookie);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every failure is surfaced to the caller as an [`Error`]; nothing is
//! retried or swallowed internally. Callers branch on the variant to decide
//! retry policy (e.g. retry [`Error::Network`], but not a 4xx [`Error::Api`]).

pub mod error;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use session::{DEFAULT_BASE_URL, Session, SessionBuilder};
pub use types::{ErrorResponse, GenerateRequest, GenerateResponse};
