use serde::Serialize;
use validator::Validate;

use crate::features::content_types::models::ContentTypeStatus;
use crate::shared::types::Translation;

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentTypePayload {
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_year: Option<i32>,
    pub status: ContentTypeStatus,
    #[validate(length(min = 1, message = "TRANSLATION_REQUIRED"))]
    pub translations: Vec<Translation>,
}

/// Partial update; absent fields are left as-is server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentTypePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<Vec<Translation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContentTypeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_year: Option<i32>,
}
