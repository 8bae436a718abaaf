use serde::Serialize;
use validator::Validate;

use crate::shared::types::Translation;

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryPayload {
    pub category_id: i64,
    pub slug: String,
    #[validate(length(min = 1, message = "TRANSLATION_REQUIRED"))]
    pub translations: Vec<Translation>,
}
