use std::env;
use std::path::PathBuf;

use crate::shared::constants::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the archive API, without a trailing slash.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Display language the console starts in.
    pub default_language: String,
}

/// Durable client storage for the signed-in session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub storage_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            session: SessionConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("ARCHIVE_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("ARCHIVE_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "ARCHIVE_API_TIMEOUT_SECS must be a valid number".to_string())?;

        let default_language =
            env::var("ARCHIVE_DEFAULT_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());

        if !SUPPORTED_LANGUAGES.contains(&default_language.as_str()) {
            return Err(format!(
                "ARCHIVE_DEFAULT_LANGUAGE must be one of: {}",
                SUPPORTED_LANGUAGES.join(", ")
            ));
        }

        Ok(Self {
            base_url,
            timeout_secs,
            default_language,
        })
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, String> {
        let storage_path = env::var("SESSION_STORAGE_PATH")
            .unwrap_or_else(|_| ".abhilekh/session.json".to_string());

        Ok(Self {
            storage_path: PathBuf::from(storage_path),
        })
    }
}
