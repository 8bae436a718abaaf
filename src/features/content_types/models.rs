use serde::{Deserialize, Serialize};

use crate::shared::projection::{Identified, Localized};
use crate::shared::types::Translation;

/// Publication state of a content type. The console only ever submits
/// `Published`; the other values arrive from the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentTypeStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub subcategory_id: Option<i64>,
    #[serde(default)]
    pub content_year: Option<i32>,
    #[serde(default)]
    pub status: ContentTypeStatus,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Localized for ContentType {
    fn translations(&self) -> &[Translation] {
        &self.translations
    }
    fn base_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn base_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Identified for ContentType {
    fn id(&self) -> i64 {
        self.id
    }
}
