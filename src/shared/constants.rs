/// Rows shown per table page.
pub const DEFAULT_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Languages the console can display. The first entry is the primary
/// language used for slug derivation.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "hi"];
pub const PRIMARY_LANGUAGE: &str = "en";
/// Language the console starts in.
pub const DEFAULT_LANGUAGE: &str = "hi";

/// Placeholder shown when neither a translation nor a bare field has text.
pub const MISSING_LABEL: &str = "---";

/// Upper bound on files per upload batch.
pub const MAX_UPLOAD_BATCH: usize = 10;

pub const GENERIC_ERROR_KEY: &str = "something_went_wrong";
pub const INVALID_CREDENTIALS_KEY: &str = "invalid_credentials_msg";
