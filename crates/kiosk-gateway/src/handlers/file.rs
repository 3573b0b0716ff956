use crate::error::{AppError, Result};
use crate::model::FileMetadata;
use axum::extract::Multipart;
use axum::Json;
use tracing::debug;

const UPLOAD_FIELD: &str = "upfile";
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub async fn file_analyse_handler(mut multipart: Multipart) -> Result<Json<FileMetadata>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::invalid(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field
            .content_type()
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::invalid(e.body_text()))?;

        debug!(name = %name, mime_type = %mime_type, size = bytes.len(), "analysed upload");
        return Ok(Json(FileMetadata {
            name,
            mime_type,
            size: bytes.len() as u64,
        }));
    }

    Err(AppError::invalid("no file uploaded"))
}
