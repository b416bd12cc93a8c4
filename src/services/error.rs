use aws_sdk_s3::error::DisplayErrorContext;
use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{0}")]
    ProviderError(String),
}

impl StorageError {
    /// Flattens an SDK error including its source chain, so the cause reaches the client.
    pub fn from_sdk<E: std::error::Error>(error: E) -> Self {
        StorageError::ProviderError(DisplayErrorContext(error).to_string())
    }
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        ApplicationError::StorageError(error.to_string())
    }
}
