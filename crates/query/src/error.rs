use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Malformed query segment '{segment}': {reason}")]
    MalformedQuery { segment: String, reason: String },
}

impl QueryError {
    pub(crate) fn malformed(segment: &str, reason: impl Into<String>) -> Self {
        QueryError::MalformedQuery {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }
}
