use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Bilingual toast texts keyed by message key: `(english, hindi)`.
    /// Server-provided keys not present here fall back to the key itself.
    static ref MESSAGES: HashMap<&'static str, (&'static str, &'static str)> = {
        let mut m = HashMap::new();
        m.insert("save_success", ("Saved successfully", "सफलतापूर्वक सहेजा गया"));
        m.insert("DELETED_SUCCESSFULLY", ("Deleted successfully", "सफलतापूर्वक हटाया गया"));
        m.insert("ERROR_DELETING", ("Error while deleting", "हटाने में त्रुटि"));
        m.insert("upload_success", ("Files uploaded successfully", "फ़ाइलें सफलतापूर्वक अपलोड हुईं"));
        m.insert(
            "invalid_credentials_msg",
            ("Invalid email or password", "अमान्य ईमेल या पासवर्ड"),
        );
        m.insert(
            "something_went_wrong",
            ("Something went wrong", "कुछ गलत हो गया"),
        );
        m
    };
}

/// Resolve a message key to display text for the given language. Unknown
/// keys are shown verbatim so server additions degrade readably.
pub fn message_text(key: &str, language: &str) -> String {
    match MESSAGES.get(key) {
        Some((en, hi)) => {
            if language == "hi" {
                (*hi).to_string()
            } else {
                (*en).to_string()
            }
        }
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_languages() {
        assert_eq!(message_text("save_success", "en"), "Saved successfully");
        assert_eq!(message_text("save_success", "hi"), "सफलतापूर्वक सहेजा गया");
    }

    #[test]
    fn unknown_keys_pass_through() {
        assert_eq!(
            message_text("CATEGORY_HAS_SUBCATEGORIES", "en"),
            "CATEGORY_HAS_SUBCATEGORIES"
        );
    }
}
