use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::error::GeneratorError;
use super::prompt::build_prompt;
use super::Generator;
use crate::scoring::ScoreResult;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Credentials travel in a header so they never appear in a request URL
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// External generator backed by the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        if config.api_key.trim().is_empty() {
            return Err(GeneratorError::Config("gemini api key is empty".to_string()));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(
        &self,
        skill_ids: &[i64],
        result: &ScoreResult,
    ) -> Result<String, GeneratorError> {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(skill_ids, result),
                }],
            }],
        };

        let res = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(GeneratorError::Api { status, body });
        }

        let body: Value = res
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;
        extract_text(&body)
            .ok_or_else(|| GeneratorError::InvalidResponse("no text in response".to_string()))
    }
}

/// Reduce a response of any shape to plain text.
///
/// Prefers the first candidate; otherwise gathers every `text` string in the
/// document, in order.
pub fn extract_text(body: &Value) -> Option<String> {
    if let Value::String(s) = body {
        return Some(s.clone()).filter(|s| !s.trim().is_empty());
    }

    let scope = body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .unwrap_or(body);

    let mut parts = Vec::new();
    collect_text(scope, &mut parts);
    let text = parts.concat();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn collect_text<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match v {
                    Value::String(s) if key == "text" => out.push(s),
                    _ => collect_text(v, out),
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_text(v, out)),
        _ => {}
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}
