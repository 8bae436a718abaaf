use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{ApiError, Result};
use crate::features::auth::SessionStore;
use crate::modules::http::transport::{
    ApiRequest, MultipartPayload, RawResponse, RequestBody, Transport,
};

/// Shared request plumbing for every service: base-URL joining, bearer
/// attachment from the session store, status mapping, and central 401
/// session teardown.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<SessionStore>,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: Arc<SessionStore>, base_url: &str) -> Self {
        Self {
            transport,
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn send(&self, method: Method, path: &str, body: RequestBody) -> Result<RawResponse> {
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.session.token().await,
            body,
        };

        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request).await?;

        if response.status == 401 {
            tracing::warn!(path, "received 401, tearing down session");
            self.session.teardown().await;
        }

        if !(200..300).contains(&response.status) {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, RequestBody::Empty).await?.json()
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize payload: {}", e)))?;
        self.send(Method::POST, path, RequestBody::Json(value))
            .await?
            .json()
    }

    /// PATCH whose response body the caller does not consume.
    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize payload: {}", e)))?;
        self.send(Method::PATCH, path, RequestBody::Json(value))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, RequestBody::Empty).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: MultipartPayload,
    ) -> Result<T> {
        self.send(Method::POST, path, RequestBody::Multipart(payload))
            .await?
            .json()
    }
}
