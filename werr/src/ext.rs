//! Annotating errors straight from a `Result`

use crate::{BoxError, Error};
use std::borrow::Cow;

/// Extension methods turning any `Result` error into a [`Error`].
///
/// An error that already is a [`Error`] is annotated in place, so repeated
/// calls add context layers instead of nesting.
pub trait ResultExt<T> {
    /// Wrap the error with context text
    fn wrap_err(self, text: impl Into<Cow<'static, str>>) -> crate::Result<T>;

    /// Wrap the error with lazily built context text
    fn with_wrap_err<S, F>(self, f: F) -> crate::Result<T>
    where
        S: Into<Cow<'static, str>>,
        F: FnOnce() -> S;

    /// Attach an HTTP status code to the error
    fn with_status(self, status: u16) -> crate::Result<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(self, text: impl Into<Cow<'static, str>>) -> crate::Result<T> {
        self.map_err(|err| Error::new(err).context(text))
    }

    fn with_wrap_err<S, F>(self, f: F) -> crate::Result<T>
    where
        S: Into<Cow<'static, str>>,
        F: FnOnce() -> S,
    {
        self.map_err(|err| Error::new(err).context(f()))
    }

    fn with_status(self, status: u16) -> crate::Result<T> {
        self.map_err(|err| Error::new(err).with_status(status))
    }
}
