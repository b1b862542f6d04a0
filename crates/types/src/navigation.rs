use crate::ids::ContentId;
use serde::{Deserialize, Serialize};

/// An entry in the site's top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Identifier of the link element; matches the content id it selects.
    pub id: ContentId,
    /// The visible link text.
    pub title: String,
    /// The link's `href`.
    pub target: String,
}

impl NavEntry {
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target: target.into(),
        }
    }
}
