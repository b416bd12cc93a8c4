use std::time::Duration;

use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::file::FileData};

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Writes the payload and returns the key it was stored under.
    async fn upload(&self, file_data: FileData) -> Result<String, ApplicationError>;

    /// Mints a time-limited read URL for `key`. Does not check that the object exists.
    async fn presigned_download_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApplicationError>;
}
