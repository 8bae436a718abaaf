use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::core::config::{ApiConfig, Config, SessionConfig};
use crate::core::error::Result;
use crate::modules::http::{ApiRequest, RawResponse, Transport};
use crate::ArchiveClient;

/// In-memory transport: canned responses keyed by method and path, every
/// request recorded for assertions. Unknown routes answer 404 with the
/// server's error envelope shape.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<(String, String), (u16, Value)>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn path_and_query(url: &str) -> String {
    // "http://api.test/categories?lang=en" -> "/categories?lang=en"
    url.splitn(4, '/')
        .nth(3)
        .map(|rest| format!("/{}", rest))
        .unwrap_or_else(|| "/".to_string())
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(request.clone());

        let key = (request.method.to_string(), path_and_query(&request.url));
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (404, json!({"data": {"message": "NOT_FOUND"}})));

        Ok(RawResponse {
            status,
            body: serde_json::to_vec(&body).unwrap(),
        })
    }
}

/// Opt-in log output for debugging tests, driven by `RUST_LOG`.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        api: ApiConfig {
            base_url: "http://api.test".to_string(),
            timeout_secs: 5,
            default_language: "hi".to_string(),
        },
        session: SessionConfig {
            storage_path: dir.path().join("session.json"),
        },
    }
}

/// A client wired to the given mock transport, with session storage in a
/// temp dir that lives as long as the returned guard.
pub fn test_client(transport: Arc<MockTransport>) -> (tempfile::TempDir, ArchiveClient) {
    let dir = tempfile::tempdir().unwrap();
    let client = ArchiveClient::with_transport(&test_config(&dir), transport);
    (dir, client)
}
