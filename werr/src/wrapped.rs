//! A single layer of context text around a cause

use crate::BoxError;
use std::borrow::Cow;
use std::fmt;

/// Rendered in place of a cause that was never set.
pub(crate) const ABSENT_CAUSE: &str = "<none>";

/// `"<text>: <source>"`, with `source` reachable through `Error::source`.
#[derive(Debug)]
pub(crate) struct Wrapped {
    text: Cow<'static, str>,
    source: Option<BoxError>,
}

impl Wrapped {
    pub(crate) fn new(text: impl Into<Cow<'static, str>>, source: Option<BoxError>) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }

    pub(crate) fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}: {}", self.text, source),
            None => write!(f, "{}: {}", self.text, ABSENT_CAUSE),
        }
    }
}

impl std::error::Error for Wrapped {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
