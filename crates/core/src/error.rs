//! Defines the unified error type for all site operations.

use docsite_menu::MenuError;
use docsite_nav::NavError;
use docsite_query::QueryError;
use docsite_traits::DomError;
use thiserror::Error;

/// The main error enum for all high-level operations.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),
    #[error("Navigation error: {0}")]
    Nav(#[from] NavError),
    #[error("Query error: {0}")]
    Query(#[from] QueryError),
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

impl SiteError {
    /// The DOM failure behind this error, however deeply it is wrapped.
    pub fn dom_error(&self) -> Option<&DomError> {
        match self {
            SiteError::Dom(e) | SiteError::Menu(MenuError::Dom(e)) | SiteError::Nav(NavError::Dom(e)) => {
                Some(e)
            }
            _ => None,
        }
    }

    /// Whether a required element was absent from the document.
    pub fn is_missing_container(&self) -> bool {
        matches!(self.dom_error(), Some(DomError::MissingContainer(_)))
    }
}
