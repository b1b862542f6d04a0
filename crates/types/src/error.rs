use thiserror::Error;

/// Errors raised while constructing validated value types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("Unsupported heading level: '{0}' (expected h1 to h6)")]
    UnsupportedHeadingLevel(String),
}
