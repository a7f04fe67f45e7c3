//! In-memory `RecordSource` for tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::client::RecordSource;
use super::error::ApiError;

#[derive(Default)]
pub struct FakeSource {
    responses: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
    posted: Mutex<Vec<Value>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for `path`; requests with a query string use `path?k=v&k=v`
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.responses.insert(key.to_string(), value);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }

    fn key(path: &str, query: &[(&str, String)]) -> String {
        if query.is_empty() {
            path.to_string()
        } else {
            let qs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}?{}", path, qs.join("&"))
        }
    }

    fn lookup(&self, key: String) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(key.clone());
        self.responses.get(&key).cloned().ok_or(ApiError::Status {
            status: 404,
            body: format!("no fake response for {}", key),
        })
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.lookup(Self::key(path, query))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.posted.lock().unwrap().push(body.clone());
        self.lookup(format!("POST {}", path))
    }
}
