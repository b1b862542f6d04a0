//! Newtype wrapper for content page identifiers.
//!
//! A content identifier names one page of the site. It doubles as the id of
//! the navigation link pointing at that page and, with an `.html` suffix, as
//! the resource loaded into the content frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// File extension appended to a content id to form its resource path.
pub const CONTENT_EXTENSION: &str = "html";

/// Identifier of a content page (e.g. `home`, `guide`).
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(Arc<str>);

impl ContentId {
    /// Creates a new ContentId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this content id
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The resource loaded into the content frame for this id: `<id>.html`.
    pub fn resource_path(&self) -> String {
        format!("{}.{}", self.0, CONTENT_EXTENSION)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for ContentId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
