use docsite_traits::DomError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error(transparent)]
    Dom(#[from] DomError),
}
