use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape every derived slug satisfies: lowercase alphanumeric segments
    /// joined by single hyphens, underscores allowed.
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9_]+(?:-[a-z0-9_]+)*$").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    // ASCII class on purpose: non-Latin scripts are stripped. Hyphens
    // substituted for whitespace survive the strip, so a multi-word
    // Devanagari name reduces to hyphens alone.
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_-]").unwrap();
}

/// Derive a URL slug from a display name. Lowercase, whitespace runs become
/// single hyphens, everything outside `[A-Za-z0-9_-]` is dropped. Computed
/// once at creation and never again.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_mixed_case_and_spaces() {
        assert_eq!(slugify("Q1 Report 2025"), "q1-report-2025");
        assert_eq!(slugify("  Land   Records "), "land-records");
    }

    #[test]
    fn slugify_is_idempotent() {
        for name in ["Q1 Report 2025", "Budget (final)", "a_b-c"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn non_latin_scripts_are_stripped() {
        // Whitespace is hyphenated before the strip, so the hyphen remains.
        assert_eq!(slugify("भूमि अभिलेख"), "-");
        assert_eq!(slugify("अभिलेख"), "");
        assert_eq!(slugify("Records भूमि 2025"), "records--2025");
    }

    #[test]
    fn latin_names_produce_valid_slugs() {
        for name in ["Annual Budget", "Q1 Report 2025", "maps"] {
            assert!(SLUG_REGEX.is_match(&slugify(name)), "{}", name);
        }
    }
}
