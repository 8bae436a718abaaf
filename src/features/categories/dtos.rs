use serde::Serialize;
use validator::Validate;

use crate::shared::types::Translation;

/// Payload for creating a category. Updates re-submit the same shape with
/// the full replacement translation set; the slug is never recomputed.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub slug: String,
    #[validate(length(min = 1, message = "TRANSLATION_REQUIRED"))]
    pub translations: Vec<Translation>,
}
