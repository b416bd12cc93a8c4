use chrono::{DateTime, Utc};

use crate::domain::models::file_record::FileRecord;

/// Row shape for inserts and scans; `id` is `None` until the store assigns one.
#[derive(Debug, Clone)]
pub struct FileRecordDTO {
    pub id: Option<i64>,
    pub filename: String,
    pub filesize: u64,
    pub s3_key: String,
    pub uploaded_at: DateTime<Utc>,
}

impl FileRecordDTO {
    pub fn new(filename: String, filesize: u64, s3_key: String, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            filename,
            filesize,
            s3_key,
            uploaded_at,
        }
    }
}

impl From<FileRecordDTO> for FileRecord {
    fn from(value: FileRecordDTO) -> Self {
        FileRecord {
            id: value.id.unwrap_or_default(),
            filename: value.filename,
            filesize: value.filesize,
            s3_key: value.s3_key,
            uploaded_at: value.uploaded_at,
        }
    }
}
