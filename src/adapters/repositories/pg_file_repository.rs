use async_trait::async_trait;
use sqlx::query_as;
use tracing::info;

use crate::{
    application::{
        dto::file_record_dto::FileRecordDTO, error::ApplicationError,
        repositories::file_repository::FileRepository,
    },
    domain::models::file_record::FileRecord,
};

pub struct PgFileRepository {
    pool: sqlx::PgPool,
}

impl PgFileRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn ensure_schema(&self) -> Result<(), ApplicationError> {
        let query = r#"
            CREATE TABLE IF NOT EXISTS files (
                id BIGSERIAL PRIMARY KEY,
                filename TEXT NOT NULL,
                filesize BIGINT NOT NULL,
                s3_key TEXT NOT NULL,
                uploaded_at TIMESTAMPTZ NOT NULL
            )
        "#;

        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        info!("Table 'files' is ready");
        Ok(())
    }

    async fn create_file(&self, file: FileRecordDTO) -> Result<FileRecord, ApplicationError> {
        let mut file = file;
        file.sanitize();

        let query = r#"
            INSERT INTO files (filename, filesize, s3_key, uploaded_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, filename, filesize, s3_key, uploaded_at
        "#;

        let created: FileRecordDTO = query_as::<_, FileRecordDTO>(query)
            .bind(&file.filename)
            .bind(file.filesize as i64)
            .bind(&file.s3_key)
            .bind(file.uploaded_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(created.into())
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, ApplicationError> {
        let query = "SELECT id, filename, filesize, s3_key, uploaded_at FROM files ORDER BY id ASC";

        let rows: Vec<FileRecordDTO> = query_as::<_, FileRecordDTO>(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(|dto| dto.into()).collect())
    }
}
