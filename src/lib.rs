//! Data-access layer for a bilingual content archive console: a category /
//! subcategory / content-type / file taxonomy with per-language translations,
//! tag-based cache invalidation, and the derived views the console renders.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

use std::sync::Arc;

pub use crate::core::error::{ApiError, Result};

use crate::core::cache::TagRegistry;
use crate::core::config::Config;
use crate::features::auth::{AuthService, SessionStore};
use crate::features::categories::CategoryService;
use crate::features::console::ConsoleState;
use crate::features::content_types::ContentTypeService;
use crate::features::files::FileService;
use crate::features::subcategories::SubCategoryService;
use crate::modules::http::{ApiClient, HttpTransport, Transport};

/// The console's single entry point: one service per feature, all sharing a
/// transport, a session store, and a tag registry.
pub struct ArchiveClient {
    pub auth: AuthService,
    pub categories: CategoryService,
    pub subcategories: SubCategoryService,
    pub content_types: ContentTypeService,
    pub files: FileService,
    pub session: Arc<SessionStore>,
    pub tags: Arc<TagRegistry>,
    default_language: String,
}

impl ArchiveClient {
    pub fn new(config: &Config) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config.api)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Wire the services to an arbitrary transport. The seam tests use.
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        let session = Arc::new(SessionStore::new(&config.session));
        let tags = Arc::new(TagRegistry::new());
        let api = Arc::new(ApiClient::new(
            transport,
            session.clone(),
            &config.api.base_url,
        ));

        Self {
            auth: AuthService::new(api.clone(), session.clone()),
            categories: CategoryService::new(api.clone(), tags.clone()),
            subcategories: SubCategoryService::new(api.clone(), tags.clone()),
            content_types: ContentTypeService::new(api.clone(), tags.clone()),
            files: FileService::new(api, tags.clone()),
            session,
            tags,
            default_language: config.api.default_language.clone(),
        }
    }

    /// Restore any persisted session. Call once at startup.
    pub async fn init(&self) {
        self.session.hydrate().await;
    }

    /// Fresh UI state in the configured starting language.
    pub fn console_state(&self) -> ConsoleState {
        ConsoleState::new(&self.default_language)
    }
}
