use sqlx::{postgres::PgRow, FromRow, Row};

use crate::application::dto::file_record_dto::FileRecordDTO;

impl FromRow<'_, PgRow> for FileRecordDTO {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let filesize: i64 = row.try_get("filesize")?;

        Ok(FileRecordDTO {
            id: Some(row.try_get("id")?),
            filename: row.try_get("filename")?,
            filesize: filesize.max(0) as u64,
            s3_key: row.try_get("s3_key")?,
            uploaded_at: row.try_get("uploaded_at")?,
        })
    }
}

impl FileRecordDTO {
    /// Clamps values that Postgres `BIGINT` cannot hold.
    pub fn sanitize(&mut self) {
        self.filesize = std::cmp::min(self.filesize, i64::MAX as u64);
    }
}
