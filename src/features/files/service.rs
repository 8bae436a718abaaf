use std::sync::Arc;

use validator::Validate;

use crate::core::cache::{Mutation, Tag, TagCache, TagRegistry};
use crate::core::error::Result;
use crate::features::files::dtos::{FilesEnvelope, UploadRequest};
use crate::features::files::models::FileObject;
use crate::modules::http::ApiClient;

pub struct FileService {
    api: Arc<ApiClient>,
    registry: Arc<TagRegistry>,
    cache: TagCache<String, Vec<FileObject>>,
}

impl FileService {
    pub fn new(api: Arc<ApiClient>, registry: Arc<TagRegistry>) -> Self {
        Self {
            api,
            cache: TagCache::new(registry.clone()),
            registry,
        }
    }

    /// Every file in the archive, behind the dashboard and global search.
    pub async fn list_all(&self) -> Result<Vec<FileObject>> {
        self.cache
            .get_or_fetch("all".to_string(), Tag::Files, || async {
                let envelope: FilesEnvelope = self.api.get_json("/files").await?;
                Ok(envelope.files)
            })
            .await
    }

    pub async fn list_by_content_type(&self, content_type_id: i64) -> Result<Vec<FileObject>> {
        let path = format!("/files/content-types/{}", content_type_id);
        self.cache
            .get_or_fetch(
                format!("content-type:{}", content_type_id),
                Tag::Files,
                || async { self.api.get_json(&path).await },
            )
            .await
    }

    pub async fn list_by_subcategory(&self, subcategory_id: i64) -> Result<Vec<FileObject>> {
        let path = format!("/files/subcategories/{}", subcategory_id);
        self.cache
            .get_or_fetch(
                format!("subcategory:{}", subcategory_id),
                Tag::Files,
                || async { self.api.get_json(&path).await },
            )
            .await
    }

    /// Ship a batch through the ingestion endpoint. Validation runs before
    /// any bytes leave the client.
    pub async fn upload(&self, request: &UploadRequest) -> Result<Vec<FileObject>> {
        request.validate()?;
        let uploaded = self
            .api
            .post_multipart("/ingestion", request.to_multipart()?)
            .await?;
        self.registry.invalidate(Mutation::UploadFiles).await;
        Ok(uploaded)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/files/{}", id)).await?;
        self.registry.invalidate(Mutation::DeleteFile).await;
        Ok(())
    }
}
