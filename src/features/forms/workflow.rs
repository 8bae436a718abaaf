use std::collections::BTreeMap;

use crate::core::error::{ApiError, Result};
use crate::features::categories::{Category, CategoryPayload, CategoryService};
use crate::features::content_types::{
    ContentTypeService, ContentTypeStatus, CreateContentTypePayload,
};
use crate::features::files::FileService;
use crate::features::subcategories::{SubCategory, SubCategoryPayload, SubCategoryService};
use crate::shared::constants::{PRIMARY_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::shared::types::Translation;
use crate::shared::validation::slugify;

/// The two taxonomy levels share one create/edit workflow; only the payload
/// target and the parent requirement differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Category,
    SubCategory,
}

#[derive(Debug, Clone, Default)]
pub struct FormEntry {
    pub name: String,
    pub description: String,
}

/// What a successful mutation hands back to the caller: a toast key and,
/// for creates, the id to navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub target_id: Option<i64>,
    pub message_key: &'static str,
}

/// Create form for a category or subcategory, one entry per language.
#[derive(Debug, Clone)]
pub struct TaxonomyForm {
    pub kind: TaxonomyKind,
    pub parent_category_id: Option<i64>,
    entries: BTreeMap<String, FormEntry>,
}

impl TaxonomyForm {
    pub fn category() -> Self {
        Self {
            kind: TaxonomyKind::Category,
            parent_category_id: None,
            entries: BTreeMap::new(),
        }
    }

    pub fn subcategory(parent_category_id: i64) -> Self {
        Self {
            kind: TaxonomyKind::SubCategory,
            parent_category_id: Some(parent_category_id),
            entries: BTreeMap::new(),
        }
    }

    pub fn set_entry(&mut self, language: &str, name: &str, description: &str) {
        self.entries.insert(
            language.to_string(),
            FormEntry {
                name: name.to_string(),
                description: description.to_string(),
            },
        );
    }

    /// Entries with a non-empty name, as wire translations. Descriptions are
    /// optional; blank ones are dropped.
    fn translation_payload(&self) -> Vec<Translation> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.name.trim().is_empty())
            .map(|(language, entry)| {
                let mut translation = Translation::new(language.clone(), entry.name.trim());
                let description = entry.description.trim();
                if !description.is_empty() {
                    translation = translation.with_description(description);
                }
                translation
            })
            .collect()
    }

    /// Slug from the primary-language name, falling back through the other
    /// supported languages in order. A name written entirely in a non-Latin
    /// script keeps only the hyphens substituted for its whitespace; the
    /// server accepts that.
    pub fn derived_slug(&self) -> String {
        let mut order = vec![PRIMARY_LANGUAGE];
        order.extend(
            SUPPORTED_LANGUAGES
                .iter()
                .copied()
                .filter(|l| *l != PRIMARY_LANGUAGE),
        );

        order
            .into_iter()
            .filter_map(|language| self.entries.get(language))
            .map(|entry| entry.name.trim())
            .find(|name| !name.is_empty())
            .map(slugify)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.translation_payload().is_empty() {
            return Err(ApiError::Validation("TRANSLATION_REQUIRED".to_string()));
        }
        if self.kind == TaxonomyKind::SubCategory && self.parent_category_id.is_none() {
            return Err(ApiError::Validation("CATEGORY_REQUIRED".to_string()));
        }
        Ok(())
    }

    /// Validate, derive the slug, and create the entity through the matching
    /// service. Form state is untouched on failure.
    pub async fn submit(
        &self,
        categories: &CategoryService,
        subcategories: &SubCategoryService,
    ) -> Result<SaveOutcome> {
        self.validate()?;
        let slug = self.derived_slug();
        let translations = self.translation_payload();

        let target_id = match self.kind {
            TaxonomyKind::Category => {
                let created = categories
                    .create(&CategoryPayload { slug, translations })
                    .await?;
                created.id
            }
            TaxonomyKind::SubCategory => {
                let created = subcategories
                    .create(&SubCategoryPayload {
                        // validate() guarantees the parent is present
                        category_id: self.parent_category_id.unwrap_or_default(),
                        slug,
                        translations,
                    })
                    .await?;
                created.id
            }
        };

        Ok(SaveOutcome {
            target_id: Some(target_id),
            message_key: "save_success",
        })
    }
}

/// Replace the translation for `updated`'s language within an existing set,
/// appending when that language has no entry yet. Other languages pass
/// through untouched.
pub fn replace_translation(existing: &[Translation], updated: Translation) -> Vec<Translation> {
    let mut translations: Vec<Translation> = existing
        .iter()
        .filter(|t| t.language_code != updated.language_code)
        .cloned()
        .collect();
    translations.push(updated);
    translations
}

/// Edit a category in the given language: the full translation set goes back
/// up with only that language's entry replaced. The slug never changes.
pub async fn update_category(
    service: &CategoryService,
    category: &Category,
    language: &str,
    name: &str,
    description: Option<&str>,
) -> Result<SaveOutcome> {
    let mut translation = Translation::new(language, name.trim());
    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        translation = translation.with_description(description);
    }

    service
        .update(
            category.id,
            &CategoryPayload {
                slug: category.slug.clone(),
                translations: replace_translation(&category.translations, translation),
            },
        )
        .await?;

    Ok(SaveOutcome {
        target_id: None,
        message_key: "save_success",
    })
}

pub async fn update_subcategory(
    service: &SubCategoryService,
    subcategory: &SubCategory,
    language: &str,
    name: &str,
    description: Option<&str>,
) -> Result<SaveOutcome> {
    let mut translation = Translation::new(language, name.trim());
    if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
        translation = translation.with_description(description);
    }

    service
        .update(
            subcategory.id,
            &SubCategoryPayload {
                category_id: subcategory.category_id,
                slug: subcategory.slug.clone(),
                translations: replace_translation(&subcategory.translations, translation),
            },
        )
        .await?;

    Ok(SaveOutcome {
        target_id: None,
        message_key: "save_success",
    })
}

/// The user's answer to a delete prompt. Every delete path takes one; there
/// is no way to delete without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub async fn delete_category(
    service: &CategoryService,
    id: i64,
    confirmation: Confirmation,
) -> Result<DeleteOutcome> {
    if confirmation == Confirmation::Cancelled {
        return Ok(DeleteOutcome::Cancelled);
    }
    service.delete(id).await?;
    Ok(DeleteOutcome::Deleted)
}

pub async fn delete_subcategory(
    service: &SubCategoryService,
    id: i64,
    category_id: i64,
    confirmation: Confirmation,
) -> Result<DeleteOutcome> {
    if confirmation == Confirmation::Cancelled {
        return Ok(DeleteOutcome::Cancelled);
    }
    service.delete(id, category_id).await?;
    Ok(DeleteOutcome::Deleted)
}

pub async fn delete_content_type(
    service: &ContentTypeService,
    id: i64,
    category_id: i64,
    confirmation: Confirmation,
) -> Result<DeleteOutcome> {
    if confirmation == Confirmation::Cancelled {
        return Ok(DeleteOutcome::Cancelled);
    }
    service.delete(id, category_id).await?;
    Ok(DeleteOutcome::Deleted)
}

pub async fn delete_file(
    service: &FileService,
    id: i64,
    confirmation: Confirmation,
) -> Result<DeleteOutcome> {
    if confirmation == Confirmation::Cancelled {
        return Ok(DeleteOutcome::Cancelled);
    }
    service.delete(id).await?;
    Ok(DeleteOutcome::Deleted)
}

/// Create form for a content type. Requires a selected category; everything
/// else is optional. Status always goes up as `PUBLISHED`.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeForm {
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub content_year: Option<i32>,
    entries: BTreeMap<String, FormEntry>,
}

impl ContentTypeForm {
    pub fn set_entry(&mut self, language: &str, name: &str, description: &str) {
        self.entries.insert(
            language.to_string(),
            FormEntry {
                name: name.to_string(),
                description: description.to_string(),
            },
        );
    }

    fn build_payload(&self) -> Result<CreateContentTypePayload> {
        let category_id = self
            .category_id
            .ok_or_else(|| ApiError::Validation("CATEGORY_REQUIRED".to_string()))?;

        let translations: Vec<Translation> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.name.trim().is_empty())
            .map(|(language, entry)| {
                let mut translation = Translation::new(language.clone(), entry.name.trim());
                let description = entry.description.trim();
                if !description.is_empty() {
                    translation = translation.with_description(description);
                }
                translation
            })
            .collect();

        if translations.is_empty() {
            return Err(ApiError::Validation("TRANSLATION_REQUIRED".to_string()));
        }

        Ok(CreateContentTypePayload {
            category_id,
            subcategory_id: self.subcategory_id,
            content_year: self.content_year,
            status: ContentTypeStatus::Published,
            translations,
        })
    }

    pub async fn submit(&self, service: &ContentTypeService) -> Result<SaveOutcome> {
        let created = service.create(&self.build_payload()?).await?;
        Ok(SaveOutcome {
            target_id: Some(created.id),
            message_key: "save_success",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_prefers_english_then_hindi() {
        let mut form = TaxonomyForm::category();
        form.set_entry("hi", "भूमि अभिलेख", "");
        form.set_entry("en", "Land Records", "");
        assert_eq!(form.derived_slug(), "land-records");

        let mut hindi_only = TaxonomyForm::category();
        hindi_only.set_entry("hi", "भूमि अभिलेख", "");
        assert_eq!(hindi_only.derived_slug(), "-");
        assert!(hindi_only.validate().is_ok());
    }

    #[test]
    fn form_without_any_name_is_rejected() {
        let mut form = TaxonomyForm::category();
        form.set_entry("en", "   ", "described but unnamed");
        assert!(matches!(
            form.validate(),
            Err(ApiError::Validation(key)) if key == "TRANSLATION_REQUIRED"
        ));
    }

    #[test]
    fn blank_descriptions_are_dropped_from_the_payload() {
        let mut form = TaxonomyForm::category();
        form.set_entry("en", " Maps ", "  ");
        form.set_entry("hi", "नक्शे", "पुराने नक्शे");

        let translations = form.translation_payload();
        assert_eq!(translations.len(), 2);
        let en = translations.iter().find(|t| t.language_code == "en").unwrap();
        assert_eq!(en.name, "Maps");
        assert_eq!(en.description, None);
        let hi = translations.iter().find(|t| t.language_code == "hi").unwrap();
        assert_eq!(hi.description.as_deref(), Some("पुराने नक्शे"));
    }

    #[test]
    fn replace_translation_touches_only_its_language() {
        let existing = vec![
            Translation::new("en", "Old name").with_description("old"),
            Translation::new("hi", "पुराना नाम"),
        ];

        let updated = replace_translation(&existing, Translation::new("en", "New name"));
        assert_eq!(updated.len(), 2);
        let en = updated.iter().find(|t| t.language_code == "en").unwrap();
        assert_eq!(en.name, "New name");
        assert_eq!(en.description, None);
        let hi = updated.iter().find(|t| t.language_code == "hi").unwrap();
        assert_eq!(hi.name, "पुराना नाम");
    }

    #[test]
    fn replace_translation_appends_a_new_language() {
        let existing = vec![Translation::new("en", "Maps")];
        let updated = replace_translation(&existing, Translation::new("hi", "नक्शे"));
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn content_type_form_requires_a_category() {
        let mut form = ContentTypeForm::default();
        form.set_entry("en", "Annual Budget", "");
        assert!(matches!(
            form.build_payload(),
            Err(ApiError::Validation(key)) if key == "CATEGORY_REQUIRED"
        ));

        form.category_id = Some(4);
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.status, ContentTypeStatus::Published);
        assert_eq!(payload.category_id, 4);
    }
}
