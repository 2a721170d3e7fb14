//! Walking error chains
//!
//! Every `Error` exposes its next layer through `std::error::Error::source`,
//! so the helpers here work across any mix of `werr`, std and `anyhow`
//! errors.

use crate::Error;

/// Iterate over `err` and every error reachable through `source()`.
pub fn iter<'a>(
    err: &'a (dyn std::error::Error + 'static),
) -> impl Iterator<Item = &'a (dyn std::error::Error + 'static)> {
    std::iter::successors(Some(err), |err| err.source())
}

/// Find the nearest [`Error`] in the chain starting at `err` (inclusive).
///
/// ```rust
/// use werr::{chain, Error};
///
/// let err: Box<dyn std::error::Error + Send + Sync> =
///     Error::new("db down").with_status(503).into();
/// let found = chain::find(&*err).unwrap();
/// assert_eq!(found.status(), 503);
/// ```
pub fn find<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a Error> {
    iter(err).find_map(|err| err.downcast_ref::<Error>())
}

/// Find the nearest [`Error`] inside an `anyhow` chain, context layers included.
pub fn find_in(err: &anyhow::Error) -> Option<&Error> {
    err.chain().find_map(|err| err.downcast_ref::<Error>())
}
