use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Leading character of a parameter segment (`/editar-proceso/:idProceso`).
pub const PARAM_SENTINEL: char = ':';

/// Route template made of literal and parameter segments.
///
/// Patterns are plain strings at this layer; structural checks (leading `/`,
/// named parameters) happen when a policy table is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern(Cow<'static, str>);

impl PathPattern {
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self(pattern.into())
    }

    pub const fn from_static(pattern: &'static str) -> Self {
        Self(Cow::Borrowed(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty segments of the pattern.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        segments(&self.0)
    }

    pub fn is_match(&self, path: &str) -> bool {
        matches(&self.0, path)
    }
}

impl core::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for PathPattern {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

/// Splits on `/`, dropping the empty pieces left by leading, trailing or
/// repeated slashes.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

pub fn is_param_segment(segment: &str) -> bool {
    segment.starts_with(PARAM_SENTINEL)
}

/// Does `path` have the shape described by `pattern`?
///
/// Segment counts must be equal. A parameter segment accepts any single path
/// segment; a literal segment must be equal byte for byte. Query strings and
/// fragments are not understood here, see [`strip_location`].
pub fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !is_param_segment(expected) && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Path component of a location (`/procesos?pagina=2#top` → `/procesos`).
pub fn strip_location(location: &str) -> &str {
    match location.find(['?', '#']) {
        Some(idx) => &location[..idx],
        None => location,
    }
}
