//! The main Error type for werr

use crate::status::{status_code, status_text};
use crate::wrapped::{Wrapped, ABSENT_CAUSE};
use std::borrow::Cow;
use std::fmt;

/// Any error that can be carried as a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error annotated with an HTTP status and context messages.
///
/// - `status`: HTTP status code, `0` when unset
/// - `cause`: the wrapped error, grown one layer per [`Error::wrap`]
///
/// # Example
///
/// ```rust
/// use werr::Error;
///
/// let err = Error::new("connection refused")
///     .context("dial upstream")
///     .with_status(502);
///
/// assert_eq!(err.status(), 502);
/// assert_eq!(err.to_string(), "(status - 502 Bad Gateway) dial upstream: connection refused");
/// assert_eq!(err.original().map(ToString::to_string).as_deref(), Some("connection refused"));
/// ```
#[derive(Default)]
pub struct Error {
    status: u16,
    cause: Option<BoxError>,
}

impl Error {
    /// Create an error around `err`.
    ///
    /// If `err` already is an [`Error`] it is returned as is, status and
    /// context included, rather than nested.
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self::from_cause(Some(err.into()))
    }

    /// Create an error around an optional cause.
    ///
    /// A `None` cause is allowed but must be wrapped before the error is
    /// displayed.
    pub fn from_cause(cause: Option<BoxError>) -> Self {
        match cause.map(|cause| cause.downcast::<Error>()) {
            Some(Ok(err)) => *err,
            Some(Err(cause)) => Self {
                status: 0,
                cause: Some(cause),
            },
            None => Self::default(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the HTTP status code, `0` if never set
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the status as an [`http::StatusCode`], `None` if unset or out of range
    pub fn status_code(&self) -> Option<http::StatusCode> {
        status_code(self.status)
    }

    /// Get the current cause, including every layer added by `wrap`
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Get the error this value was created from, beneath all context layers
    pub fn original(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        let mut current = self.cause.as_deref()?;
        while let Some(wrapped) = current.downcast_ref::<Wrapped>() {
            current = wrapped.inner()?;
        }
        Some(current)
    }

    /// Strip one layer: the cause beneath the current composed message.
    ///
    /// Returns `None` when nothing was wrapped and the cause has no source
    /// of its own.
    pub fn unwrap(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_deref()?.source()
    }

    /// The display text, or `None` when there is no cause to render
    pub fn message(&self) -> Option<String> {
        self.cause.as_ref().map(|_| self.to_string())
    }

    // =========================================================================
    // Mutations (chainable)
    // =========================================================================

    /// Set the HTTP status code. `0` clears it; the range is not checked.
    pub fn set_status(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    /// Prepend `text` to the message as `"<text>: <previous message>"`.
    ///
    /// An empty `text` still inserts the `": "` separator.
    pub fn wrap(&mut self, text: impl Into<Cow<'static, str>>) -> &mut Self {
        let cause = self.cause.take();
        self.cause = Some(Box::new(Wrapped::new(text, cause)));
        self
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the HTTP status code
    pub fn with_status(mut self, status: u16) -> Self {
        self.set_status(status);
        self
    }

    /// Wrap the message with context text
    pub fn context(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.wrap(text);
        self
    }

    // =========================================================================
    // Logging
    // =========================================================================

    /// Emit this error as a `tracing` event, levelled by status class.
    pub fn report(&self) {
        let message = self
            .message()
            .unwrap_or_else(|| ABSENT_CAUSE.to_string());

        match self.status_code() {
            Some(code) if code.is_server_error() => {
                tracing::error!(status = self.status, error = %message, "server error")
            }
            Some(code) if code.is_client_error() => {
                tracing::warn!(status = self.status, error = %message, "client error")
            }
            _ => tracing::debug!(status = self.status, error = %message, "error"),
        }
    }
}

// =============================================================================
// Display - "(status - <code> <name>) <cause>"
// =============================================================================

/// # Panics
///
/// Panics if the error has no cause. Wrap it or construct it from a real
/// error first; [`Error::message`] is the non-panicking alternative.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(cause) = &self.cause else {
            panic!("werr::Error displayed without a cause");
        };

        if let Some(text) = status_text(self.status) {
            write!(f, "(status - {} {}) ", self.status, text)?;
        }
        write!(f, "{}", cause)
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(_) => writeln!(f, "{}", self)?,
            None => writeln!(f, "{}", ABSENT_CAUSE)?,
        }

        if self.status != 0 {
            writeln!(f)?;
            writeln!(f, "    Status: {}", self.status)?;
        }

        let mut source = self.unwrap();
        if source.is_some() {
            writeln!(f)?;
            writeln!(f, "    Caused by:")?;
        }
        while let Some(err) = source {
            writeln!(f, "        {}", err)?;
            source = err.source();
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.unwrap()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(err)
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::new(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::new(message)
    }
}
