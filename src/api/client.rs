use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::error::ApiError;

/// Read/write access to the venture and skill service.
///
/// Paths are joined onto the service base URL, so index links such as
/// `/api/v2/Startup/7` can be passed through unchanged.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}

/// `reqwest`-backed source with a fixed per-call timeout
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    create_timeout: Duration,
}

impl HttpSource {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        create_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::Config("api base URL is empty".to_string()));
        }
        let client = Client::builder()
            .user_agent(concat!("venture-odds/", env!("CARGO_PKG_VERSION")))
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url,
            create_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Join a service path onto the base URL, tolerating missing or doubled slashes
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim();
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

async fn read_json(res: reqwest::Response) -> Result<Value, ApiError> {
    if !res.status().is_success() {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, body });
    }
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let res = self.client.get(self.url(path)).query(query).send().await?;
        read_json(res).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let res = self
            .client
            .post(self.url(path))
            .timeout(self.create_timeout)
            .json(body)
            .send()
            .await?;
        read_json(res).await
    }
}
