use axum::body::Bytes;
use axum::extract::Multipart;

use crate::domain::Document;

use super::error::ApiError;

pub const FILE_FIELD: &str = "file";

pub struct Upload {
    pub document: Document,
    pub data: Bytes,
}

/// Reads the `file` field into memory. Other fields are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

        let document = Document::from_upload(filename, data.len() as u64);
        return Ok(Upload { document, data });
    }

    tracing::warn!("Request with no file field");
    Err(ApiError::bad_request("No file uploaded"))
}
