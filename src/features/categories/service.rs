use std::sync::Arc;

use validator::Validate;

use crate::core::cache::{Mutation, Tag, TagCache, TagRegistry};
use crate::core::error::Result;
use crate::features::categories::dtos::CategoryPayload;
use crate::features::categories::models::Category;
use crate::modules::http::ApiClient;

pub struct CategoryService {
    api: Arc<ApiClient>,
    registry: Arc<TagRegistry>,
    cache: TagCache<String, Vec<Category>>,
}

impl CategoryService {
    pub fn new(api: Arc<ApiClient>, registry: Arc<TagRegistry>) -> Self {
        Self {
            api,
            cache: TagCache::new(registry.clone()),
            registry,
        }
    }

    /// Category list for the given display language, cached under the
    /// `Categories` tag per language.
    pub async fn list(&self, lang: &str) -> Result<Vec<Category>> {
        let path = format!("/categories?lang={}", urlencoding::encode(lang));
        self.cache
            .get_or_fetch(lang.to_string(), Tag::Categories, || async {
                self.api.get_json(&path).await
            })
            .await
    }

    pub async fn create(&self, payload: &CategoryPayload) -> Result<Category> {
        payload.validate()?;
        let created: Category = self.api.post_json("/categories", payload).await?;
        self.registry.invalidate(Mutation::CreateCategory).await;
        Ok(created)
    }

    pub async fn update(&self, id: i64, payload: &CategoryPayload) -> Result<()> {
        payload.validate()?;
        self.api
            .patch_json(&format!("/categories/{}", id), payload)
            .await?;
        self.registry.invalidate(Mutation::UpdateCategory).await;
        Ok(())
    }

    /// Fails with `Validation` when the category still has subcategories;
    /// the list stays untouched in that case.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/categories/{}", id)).await?;
        self.registry.invalidate(Mutation::DeleteCategory).await;
        Ok(())
    }
}
