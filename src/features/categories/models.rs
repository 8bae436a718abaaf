use serde::{Deserialize, Serialize};

use crate::shared::projection::{Identified, Localized};
use crate::shared::types::Translation;

/// Top level of the taxonomy. `name`/`description` are the server's bare
/// fields; display text goes through the active-language projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Localized for Category {
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

impl Identified for Category {
    fn id(&self) -> i64 {
        self.id
    }
}
