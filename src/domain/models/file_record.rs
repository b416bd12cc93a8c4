use chrono::{DateTime, Utc};
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: i64,
    pub filename: String,
    pub filesize: u64,
    pub s3_key: String,
    pub uploaded_at: DateTime<Utc>,
}
