use std::path::PathBuf;

use tokio::fs;
use tokio::sync::RwLock;

use crate::core::config::SessionConfig;
use crate::core::error::{ApiError, Result};
use crate::features::auth::model::AuthSession;

/// In-memory session backed by a JSON file, the client-storage analog.
/// Hydrated once at startup; kept in sync on login and teardown.
pub struct SessionStore {
    path: PathBuf,
    state: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            path: config.storage_path.clone(),
            state: RwLock::new(None),
        }
    }

    /// Restore a previously persisted session, if any. A corrupt or missing
    /// file just means signed out.
    pub async fn hydrate(&self) {
        let Ok(bytes) = fs::read(&self.path).await else {
            return;
        };
        match serde_json::from_slice::<AuthSession>(&bytes) {
            Ok(session) => {
                *self.state.write().await = Some(session);
                tracing::debug!("session restored from storage");
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable session file");
            }
        }
    }

    /// Persist and activate a fresh session.
    pub async fn establish(&self, session: AuthSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Internal(format!("Failed to create session dir: {}", e)))?;
        }
        let bytes = serde_json::to_vec(&session)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize session: {}", e)))?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to persist session: {}", e)))?;

        *self.state.write().await = Some(session);
        Ok(())
    }

    /// Drop the session from memory and disk. Runs on logout and on any 401.
    pub async fn teardown(&self) {
        *self.state.write().await = None;
        if let Err(e) = fs::remove_file(&self.path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, "failed to remove session file");
            }
        }
    }

    pub async fn token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    pub async fn role(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.role.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    pub async fn current(&self) -> Option<AuthSession> {
        self.state.read().await.clone()
    }
}
