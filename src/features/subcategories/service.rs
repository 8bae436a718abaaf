use std::sync::Arc;

use validator::Validate;

use crate::core::cache::{Mutation, Tag, TagCache, TagRegistry};
use crate::core::error::Result;
use crate::features::subcategories::dtos::SubCategoryPayload;
use crate::features::subcategories::models::SubCategory;
use crate::modules::http::ApiClient;

pub struct SubCategoryService {
    api: Arc<ApiClient>,
    registry: Arc<TagRegistry>,
    cache: TagCache<(i64, String), Vec<SubCategory>>,
}

impl SubCategoryService {
    pub fn new(api: Arc<ApiClient>, registry: Arc<TagRegistry>) -> Self {
        Self {
            api,
            cache: TagCache::new(registry.clone()),
            registry,
        }
    }

    /// Subcategories of one parent category, tagged per parent so sibling
    /// categories' lists survive mutations here.
    pub async fn list(&self, category_id: i64, lang: &str) -> Result<Vec<SubCategory>> {
        let path = format!(
            "/subcategories/category/{}?lang={}",
            category_id,
            urlencoding::encode(lang)
        );
        self.cache
            .get_or_fetch(
                (category_id, lang.to_string()),
                Tag::SubCategories(category_id),
                || async { self.api.get_json(&path).await },
            )
            .await
    }

    pub async fn create(&self, payload: &SubCategoryPayload) -> Result<SubCategory> {
        payload.validate()?;
        let created: SubCategory = self.api.post_json("/subcategories", payload).await?;
        self.registry
            .invalidate(Mutation::CreateSubCategory {
                category_id: payload.category_id,
            })
            .await;
        Ok(created)
    }

    pub async fn update(&self, id: i64, payload: &SubCategoryPayload) -> Result<()> {
        payload.validate()?;
        self.api
            .patch_json(&format!("/subcategories/{}", id), payload)
            .await?;
        self.registry
            .invalidate(Mutation::UpdateSubCategory {
                category_id: payload.category_id,
            })
            .await;
        Ok(())
    }

    pub async fn delete(&self, id: i64, category_id: i64) -> Result<()> {
        self.api.delete(&format!("/subcategories/{}", id)).await?;
        self.registry
            .invalidate(Mutation::DeleteSubCategory { category_id })
            .await;
        Ok(())
    }
}
