use serde::{Deserialize, Serialize};

/// Signed-in session as returned by `POST /auth/login` and persisted to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    /// The user's role, carried under `type` on the wire.
    #[serde(rename = "type")]
    pub role: String,
}
