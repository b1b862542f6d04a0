use docsite_traits::DomError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error(transparent)]
    Dom(#[from] DomError),
}
