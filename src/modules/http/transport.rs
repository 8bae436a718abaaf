use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::core::config::ApiConfig;
use crate::core::error::{ApiError, Result};

/// A single outbound request, transport-agnostic.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartPayload),
}

/// Multipart form content, kept as plain data so the mock transport can
/// inspect it.
#[derive(Debug, Clone, Default)]
pub struct MultipartPayload {
    pub parts: Vec<FilePart>,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body)
            .map_err(|e| ApiError::Internal(format!("Unexpected response body: {}", e)))
    }
}

/// The seam between services and the wire. Production uses reqwest; tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.client.request(request.method.clone(), &request.url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(payload) => {
                let mut form = reqwest::multipart::Form::new();
                for (name, value) in payload.fields {
                    form = form.text(name, value);
                }
                for part in payload.parts {
                    let file = reqwest::multipart::Part::bytes(part.bytes)
                        .file_name(part.file_name)
                        .mime_str(&part.mime_type)
                        .map_err(|e| {
                            ApiError::Validation(format!("Invalid MIME type: {}", e))
                        })?;
                    form = form.part(part.field, file);
                }
                builder.multipart(form)
            }
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(url = %request.url, error = %e, "request failed to reach server");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(ApiError::from)?.to_vec();

        Ok(RawResponse { status, body })
    }
}
