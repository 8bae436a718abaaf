use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use crate::core::error::{ApiError, Result};
use crate::features::auth::model::AuthSession;
use crate::features::auth::session_store::SessionStore;
use crate::modules::http::ApiClient;
use crate::shared::constants::INVALID_CREDENTIALS_KEY;

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "email_blank_error"),
        email(message = "email_invalid_error")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "password_blank_error"))]
    pub password: String,
}

pub struct AuthService {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    /// Validate credentials client-side, exchange them for a session, and
    /// persist it. Rejected credentials always surface as the invalid
    /// credentials key regardless of the server's wording.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let session: AuthSession = self
            .api
            .post_json("/auth/login", &request)
            .await
            .map_err(|e| match e {
                ApiError::Auth(_) | ApiError::Validation(_) => {
                    ApiError::Auth(INVALID_CREDENTIALS_KEY.to_string())
                }
                other => other,
            })?;

        self.session.establish(session.clone()).await?;
        tracing::debug!(role = %session.role, "login succeeded");
        Ok(session)
    }

    pub async fn logout(&self) {
        self.session.teardown().await;
        tracing::debug!("session cleared");
    }
}
