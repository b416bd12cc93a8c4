use async_trait::async_trait;

use crate::{
    application::{dto::file_record_dto::FileRecordDTO, error::ApplicationError},
    domain::models::file_record::FileRecord,
};

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Creates the `files` table when it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), ApplicationError>;
    async fn create_file(&self, file: FileRecordDTO) -> Result<FileRecord, ApplicationError>;
    /// Every record, ordered by `id` ascending.
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApplicationError>;
}
