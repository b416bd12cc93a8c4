use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::PathRejection,
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::{
    adapters::{
        dto::file_dto::{DownloadUrlResponse, FileResponse, UploadFileResponse},
        state::AppState,
    },
    application::{dto::file_record_dto::FileRecordDTO, error::ApplicationError},
    domain::models::file::FileData,
};

const FILE_FIELD: &str = "file";
const NO_FILE_PROVIDED: &str = "No file provided";

fn no_file_provided() -> ApplicationError {
    ApplicationError::BadRequest(NO_FILE_PROVIDED.to_string())
}

fn multipart_error(e: MultipartError) -> ApplicationError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApplicationError::PayloadTooLarge(e.body_text())
    } else {
        ApplicationError::BadRequest(e.body_text())
    }
}

pub struct FileController;

impl FileController {
    /// Stores the `file` part in the blob store, then records its metadata.
    /// POST /upload
    ///
    /// The two writes are sequential and not atomic: a failed insert leaves
    /// the blob in place.
    pub async fn upload_file(
        State(app_state): State<AppState>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<(StatusCode, Json<UploadFileResponse>), ApplicationError> {
        let mut multipart = multipart.map_err(|e| {
            warn!("Upload without multipart body: {}", e);
            no_file_provided()
        })?;

        let mut file_data: Option<FileData> = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            if field.name() != Some(FILE_FIELD) || file_data.is_some() {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let content = field.bytes().await.map_err(multipart_error)?.to_vec();

            if filename.is_empty() {
                warn!("'file' part carries no filename");
                return Err(no_file_provided());
            }

            file_data = Some(FileData::new(content, filename, content_type));
        }

        let file_data = file_data.ok_or_else(|| {
            warn!("Missing required 'file' field in upload");
            no_file_provided()
        })?;

        let filename = file_data.filename.clone();
        let filesize = file_data.size();

        let s3_key = app_state.storage_service.upload(file_data).await?;
        let uploaded_at = Utc::now();

        info!("Stored blob: key={} size={}", s3_key, filesize);

        let record = app_state
            .file_repository
            .create_file(FileRecordDTO::new(
                filename,
                filesize,
                s3_key.clone(),
                uploaded_at,
            ))
            .await
            .map_err(|e| {
                error!(
                    orphaned_key = %s3_key,
                    "Metadata insert failed after blob upload; needs manual reconciliation: {:?}",
                    e
                );
                e
            })?;

        Ok((StatusCode::CREATED, Json(UploadFileResponse::from(record))))
    }

    /// GET /files
    pub async fn list_files(
        State(app_state): State<AppState>,
    ) -> Result<Json<Vec<FileResponse>>, ApplicationError> {
        let files = app_state.file_repository.list_files().await?;
        Ok(Json(files.into_iter().map(FileResponse::from).collect()))
    }

    /// Presigned read URL for `filename`. No existence check is made.
    /// GET /download/{filename}
    pub async fn download_file(
        State(app_state): State<AppState>,
        path: Result<Path<String>, PathRejection>,
    ) -> Result<Json<DownloadUrlResponse>, ApplicationError> {
        let Path(filename) = path.map_err(|e| ApplicationError::BadRequest(e.body_text()))?;

        let download_url = app_state
            .storage_service
            .presigned_download_url(&filename, app_state.download_url_ttl)
            .await?;

        Ok(Json(DownloadUrlResponse { download_url }))
    }
}
