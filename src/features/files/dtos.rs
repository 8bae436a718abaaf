use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::error::{ApiError, Result};
use crate::features::files::models::{FileObject, MetadataEntry};
use crate::modules::http::{FilePart, MultipartPayload};
use crate::shared::constants::MAX_UPLOAD_BATCH;

/// One file staged for upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    #[serde(skip_serializing)]
    pub bytes: Vec<u8>,
}

fn within_batch_limit(files: &[UploadFile]) -> std::result::Result<(), ValidationError> {
    if files.len() > MAX_UPLOAD_BATCH {
        return Err(ValidationError::new("FILES_BATCH_TOO_LARGE"));
    }
    Ok(())
}

/// Ingestion request. At most `MAX_UPLOAD_BATCH` files go up per batch.
#[derive(Debug, Validate)]
pub struct UploadRequest {
    #[validate(
        length(min = 1, message = "FILES_REQUIRED"),
        custom(function = within_batch_limit)
    )]
    pub files: Vec<UploadFile>,
    pub content_type_id: i64,
    pub content_year: i32,
    pub file_type: String,
    pub metadata: Vec<MetadataEntry>,
}

impl UploadRequest {
    /// Read-only storage path preview shown alongside the form.
    pub fn logical_path(&self) -> String {
        let file_name = self
            .files
            .first()
            .map(|f| f.file_name.as_str())
            .unwrap_or("...");
        format!(
            "/Documents/{}/{}/{}",
            self.file_type, self.content_year, file_name
        )
    }

    pub fn to_multipart(&self) -> Result<MultipartPayload> {
        let metadata = serde_json::to_string(&self.metadata)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize metadata: {}", e)))?;

        Ok(MultipartPayload {
            parts: self
                .files
                .iter()
                .map(|file| FilePart {
                    field: "files".to_string(),
                    file_name: file.file_name.clone(),
                    mime_type: file.mime_type.clone(),
                    bytes: file.bytes.clone(),
                })
                .collect(),
            fields: vec![
                ("contentTypeId".to_string(), self.content_type_id.to_string()),
                ("contentYear".to_string(), self.content_year.to_string()),
                ("type".to_string(), self.file_type.clone()),
                ("metadata".to_string(), metadata),
            ],
        })
    }
}

/// `GET /files` is the one list endpoint wrapped in an envelope.
#[derive(Debug, Deserialize)]
pub struct FilesEnvelope {
    pub files: Vec<FileObject>,
    pub total: i64,
}
