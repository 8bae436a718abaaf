use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::files::classify::{classify, FileKind};
use crate::shared::projection::Identified;

/// An archived file. The binary itself is opaque; only the URL addresses it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileObject {
    pub id: i64,
    pub file_name: String,
    pub file_size: i64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
    pub url: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub content_type_id: Option<i64>,
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

impl FileObject {
    /// MIME type takes precedence when it clearly marks an image; otherwise
    /// fall back to the file-name classification.
    pub fn kind(&self) -> FileKind {
        if let Some(mime) = &self.mime_type {
            if mime.starts_with("image/") {
                return FileKind::Media;
            }
        }
        classify(&self.file_name)
    }
}

impl Identified for FileObject {
    fn id(&self) -> i64 {
        self.id
    }
}

/// View filter combining a kind with a case-insensitive name substring.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    pub kind: Option<FileKind>,
    pub query: String,
}

pub fn filter_files<'a>(files: &'a [FileObject], filter: &FileFilter) -> Vec<&'a FileObject> {
    let needle = filter.query.trim().to_lowercase();
    files
        .iter()
        .filter(|file| filter.kind.map_or(true, |kind| file.kind() == kind))
        .filter(|file| needle.is_empty() || file.file_name.to_lowercase().contains(&needle))
        .collect()
}
