//! HTTP status names

use http::StatusCode;

/// Returns the canonical reason phrase for an HTTP status code.
///
/// `0` and codes without a registered name (e.g. `999`) yield `None`.
pub fn status_text(code: u16) -> Option<&'static str> {
    StatusCode::from_u16(code).ok()?.canonical_reason()
}

/// Typed view of a raw status, `None` when unset or out of range.
pub(crate) fn status_code(code: u16) -> Option<StatusCode> {
    if code == 0 {
        return None;
    }
    StatusCode::from_u16(code).ok()
}
