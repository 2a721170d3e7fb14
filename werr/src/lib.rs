//! # werr
//!
//! Error decoration for HTTP-serving code: wrap any error with an optional
//! HTTP status code and a chain of context messages, without losing the
//! underlying cause.
//!
//! ## Usage
//!
//! ```rust
//! use werr::Error;
//!
//! let mut err = Error::new("db down");
//! err.set_status(503).wrap("query failed");
//!
//! assert_eq!(err.to_string(), "(status - 503 Service Unavailable) query failed: db down");
//! assert_eq!(err.status(), 503);
//! assert_eq!(err.unwrap().map(ToString::to_string).as_deref(), Some("db down"));
//! ```
//!
//! ## Principles
//!
//! - `Error::new` on an existing `Error` hands it back instead of nesting it
//! - `wrap` only grows the message; every earlier layer stays reachable
//!   through `unwrap` / `source`
//! - A status of `0` means unset and adds no prefix
//! - Use [`chain::find`] to locate the nearest `Error` in any error chain

pub mod chain;
mod error;
mod ext;
mod status;
mod wrapped;

pub use error::{BoxError, Error};
pub use ext::ResultExt;
pub use status::status_text;

/// Result type alias using werr Error
pub type Result<T> = std::result::Result<T, Error>;
