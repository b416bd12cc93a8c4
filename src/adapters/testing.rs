//! In-memory collaborators for exercising the HTTP layer without S3 or Postgres.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::Router;

use crate::{
    adapters::{router::build_router, state::AppState},
    application::{
        dto::file_record_dto::FileRecordDTO, error::ApplicationError,
        repositories::file_repository::FileRepository, services::StorageService,
    },
    domain::{
        config::settings::Settings,
        models::{file::FileData, file_record::FileRecord},
    },
};

pub const TEST_BUCKET: &str = "uploads";

#[derive(Default)]
pub struct InMemoryStorage {
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub upload_error: Option<String>,
    pub presign_error: Option<String>,
}

impl InMemoryStorage {
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageService for InMemoryStorage {
    async fn upload(&self, file_data: FileData) -> Result<String, ApplicationError> {
        if let Some(ref msg) = self.upload_error {
            return Err(ApplicationError::StorageError(msg.clone()));
        }
        let key = file_data.storage_key().to_string();
        self.objects
            .lock()
            .unwrap()
            .insert(key.clone(), file_data.content);
        Ok(key)
    }

    async fn presigned_download_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApplicationError> {
        if let Some(ref msg) = self.presign_error {
            return Err(ApplicationError::StorageError(msg.clone()));
        }
        Ok(format!(
            "https://{}.s3.amazonaws.com/{}?X-Amz-Expires={}",
            TEST_BUCKET,
            key,
            expires_in.as_secs()
        ))
    }
}

#[derive(Default)]
pub struct InMemoryFileRepository {
    pub rows: Mutex<Vec<FileRecord>>,
    pub insert_error: Option<String>,
    pub list_error: Option<String>,
}

impl InMemoryFileRepository {
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn ensure_schema(&self) -> Result<(), ApplicationError> {
        Ok(())
    }

    async fn create_file(&self, file: FileRecordDTO) -> Result<FileRecord, ApplicationError> {
        if let Some(ref msg) = self.insert_error {
            return Err(ApplicationError::DatabaseError(msg.clone()));
        }
        let mut rows = self.rows.lock().unwrap();
        let mut dto = file;
        dto.id = Some(rows.len() as i64 + 1);
        let record: FileRecord = dto.into();
        rows.push(record.clone());
        Ok(record)
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, ApplicationError> {
        if let Some(ref msg) = self.list_error {
            return Err(ApplicationError::DatabaseError(msg.clone()));
        }
        Ok(self.rows.lock().unwrap().clone())
    }
}

pub fn test_settings(max_upload_bytes: Option<usize>) -> Settings {
    let limit = max_upload_bytes.map(|n| n.to_string());
    Settings::from_lookup(|key| match key {
        "S3_BUCKET" => Some(TEST_BUCKET.to_string()),
        "MAX_UPLOAD_BYTES" => limit.clone(),
        _ => None,
    })
    .expect("test settings are valid")
}

pub fn test_router(
    storage: Arc<InMemoryStorage>,
    repository: Arc<InMemoryFileRepository>,
    settings: &Settings,
) -> Router {
    let app_state = AppState {
        storage_service: storage,
        file_repository: repository,
        download_url_ttl: settings.download_url_ttl,
    };
    build_router(app_state, settings)
}
