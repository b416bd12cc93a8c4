use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::file_record::FileRecord;

const UPLOAD_SUCCESS_MESSAGE: &str = "Upload successful";

#[derive(Debug, Serialize)]
pub struct UploadFileResponse {
    pub message: String,
    pub filename: String,
    pub filesize: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<FileRecord> for UploadFileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            filename: record.filename,
            filesize: record.filesize,
            uploaded_at: record.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: i64,
    pub filename: String,
    pub filesize: u64,
    pub s3_key: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            filesize: record.filesize,
            s3_key: record.s3_key,
            uploaded_at: record.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DownloadUrlResponse {
    pub download_url: String,
}
