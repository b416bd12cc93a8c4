mod error;
mod s3_storage;

pub use error::StorageError;
pub use s3_storage::S3StorageService;

use std::sync::Arc;

use crate::{application::services::StorageService, domain::config::settings::StorageSettings};

pub async fn create_storage_service(settings: &StorageSettings) -> Arc<dyn StorageService> {
    Arc::new(S3StorageService::from_settings(settings).await)
}
