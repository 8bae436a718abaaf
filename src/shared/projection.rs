use crate::shared::constants::MISSING_LABEL;
use crate::shared::types::Translation;

/// Active-language projection over a translated entity. Resolution order is
/// fixed: the translation matching the active language (non-empty field),
/// then the entity's bare field (non-empty), then the `"---"` placeholder.
/// There is no cross-language fallback.
pub trait Localized {
    fn translations(&self) -> &[Translation];
    fn base_name(&self) -> Option<&str>;
    fn base_description(&self) -> Option<&str>;

    fn translation_for(&self, language: &str) -> Option<&Translation> {
        self.translations()
            .iter()
            .find(|t| t.language_code == language)
    }

    fn display_name(&self, language: &str) -> String {
        self.translation_for(language)
            .map(|t| t.name.as_str())
            .filter(|name| !name.is_empty())
            .or_else(|| self.base_name().filter(|name| !name.is_empty()))
            .unwrap_or(MISSING_LABEL)
            .to_string()
    }

    fn display_description(&self, language: &str) -> String {
        self.translation_for(language)
            .and_then(|t| t.description.as_deref())
            .filter(|description| !description.is_empty())
            .or_else(|| self.base_description().filter(|d| !d.is_empty()))
            .unwrap_or(MISSING_LABEL)
            .to_string()
    }
}

/// Entities addressable by numeric id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Resolve a raw route parameter against a fetched list. The parameter is
/// coerced to the id's numeric type before comparison; anything non-numeric
/// resolves to nothing.
pub fn find_by_route_id<'a, T: Identified>(items: &'a [T], raw_id: &str) -> Option<&'a T> {
    let id: i64 = raw_id.trim().parse().ok()?;
    items.iter().find(|item| item.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        id: i64,
        name: Option<String>,
        translations: Vec<Translation>,
    }

    impl Localized for Sample {
        fn translations(&self) -> &[Translation] {
            &self.translations
        }
        fn base_name(&self) -> Option<&str> {
            self.name.as_deref()
        }
        fn base_description(&self) -> Option<&str> {
            None
        }
    }

    impl Identified for Sample {
        fn id(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn prefers_active_language_translation() {
        let sample = Sample {
            id: 1,
            name: Some("base".into()),
            translations: vec![
                Translation::new("en", "Records"),
                Translation::new("hi", "अभिलेख"),
            ],
        };
        assert_eq!(sample.display_name("hi"), "अभिलेख");
        assert_eq!(sample.display_name("en"), "Records");
    }

    #[test]
    fn falls_back_to_bare_field_then_placeholder() {
        let with_base = Sample {
            id: 1,
            name: Some("base".into()),
            translations: vec![],
        };
        assert_eq!(with_base.display_name("en"), "base");

        let bare = Sample {
            id: 2,
            name: None,
            translations: vec![],
        };
        assert_eq!(bare.display_name("en"), "---");
    }

    #[test]
    fn hindi_only_entity_shows_placeholder_in_english() {
        // No cross-language fallback: a Hindi-only entity viewed in English
        // shows the placeholder, not the Hindi text.
        let sample = Sample {
            id: 3,
            name: None,
            translations: vec![Translation::new("hi", "भूमि अभिलेख")],
        };
        assert_eq!(sample.display_name("en"), "---");
        assert_eq!(sample.display_name("hi"), "भूमि अभिलेख");
    }

    #[test]
    fn empty_translation_name_is_skipped() {
        let sample = Sample {
            id: 4,
            name: Some("base".into()),
            translations: vec![Translation::new("en", "")],
        };
        assert_eq!(sample.display_name("en"), "base");
    }

    #[test]
    fn route_ids_are_coerced_numerically() {
        let items = vec![
            Sample { id: 7, name: None, translations: vec![] },
            Sample { id: 12, name: None, translations: vec![] },
        ];
        assert_eq!(find_by_route_id(&items, "12").map(|s| s.id), Some(12));
        assert_eq!(find_by_route_id(&items, " 7 ").map(|s| s.id), Some(7));
        assert!(find_by_route_id(&items, "twelve").is_none());
        assert!(find_by_route_id(&items, "99").is_none());
    }
}
