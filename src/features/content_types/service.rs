use std::sync::Arc;

use validator::Validate;

use crate::core::cache::{Mutation, Tag, TagCache, TagRegistry};
use crate::core::error::Result;
use crate::features::content_types::dtos::{CreateContentTypePayload, UpdateContentTypePayload};
use crate::features::content_types::models::ContentType;
use crate::modules::http::ApiClient;

pub struct ContentTypeService {
    api: Arc<ApiClient>,
    registry: Arc<TagRegistry>,
    cache: TagCache<(Option<i64>, String), Vec<ContentType>>,
}

impl ContentTypeService {
    pub fn new(api: Arc<ApiClient>, registry: Arc<TagRegistry>) -> Self {
        Self {
            api,
            cache: TagCache::new(registry.clone()),
            registry,
        }
    }

    /// Content types, optionally scoped to a category. The unscoped list is
    /// its own tag so category-scoped mutations invalidate both.
    pub async fn list(&self, category_id: Option<i64>, lang: &str) -> Result<Vec<ContentType>> {
        let encoded = urlencoding::encode(lang);
        let path = match category_id {
            Some(id) => format!("/content-types?categoryId={}&lang={}", id, encoded),
            None => format!("/content-types?lang={}", encoded),
        };
        self.cache
            .get_or_fetch(
                (category_id, lang.to_string()),
                Tag::ContentTypes(category_id),
                || async { self.api.get_json(&path).await },
            )
            .await
    }

    pub async fn create(&self, payload: &CreateContentTypePayload) -> Result<ContentType> {
        payload.validate()?;
        let created: ContentType = self.api.post_json("/content-types", payload).await?;
        self.registry
            .invalidate(Mutation::CreateContentType {
                category_id: payload.category_id,
            })
            .await;
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i64,
        category_id: i64,
        payload: &UpdateContentTypePayload,
    ) -> Result<()> {
        self.api
            .patch_json(&format!("/content-types/{}", id), payload)
            .await?;
        self.registry
            .invalidate(Mutation::UpdateContentType { category_id })
            .await;
        Ok(())
    }

    pub async fn delete(&self, id: i64, category_id: i64) -> Result<()> {
        self.api.delete(&format!("/content-types/{}", id)).await?;
        self.registry
            .invalidate(Mutation::DeleteContentType { category_id })
            .await;
        Ok(())
    }
}
