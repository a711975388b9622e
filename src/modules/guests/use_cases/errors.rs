use crate::modules::guests::core::errors::GuestStoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] GuestStoreError),

    #[error("invalid request: {0}")]
    Validation(String),
}
