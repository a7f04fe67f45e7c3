//! Turns a score into readable text.
//!
//! An external generator is used when a credential is configured; any failure
//! falls back to a deterministic template built from the score alone.

pub mod error;
pub mod fallback;
pub mod gemini;
pub mod prompt;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::scoring::ScoreResult;

pub use error::GeneratorError;
pub use fallback::{fallback_text, LocalFallbackGenerator};
pub use gemini::{GeminiConfig, GeminiGenerator};

#[async_trait]
pub trait Generator: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        skill_ids: &[i64],
        result: &ScoreResult,
    ) -> Result<String, GeneratorError>;
}

/// Pick the generator once, at construction time.
///
/// Without a credential the local generator is returned and no network call is
/// ever attempted.
pub fn build_generator(gemini: Option<GeminiConfig>) -> Arc<dyn Generator> {
    let Some(config) = gemini else {
        debug!("no generator credential, using local explanations");
        return Arc::new(LocalFallbackGenerator);
    };

    match GeminiGenerator::new(config) {
        Ok(generator) => Arc::new(generator),
        Err(e) => {
            warn!(error = %e, "could not set up gemini, using local explanations");
            Arc::new(LocalFallbackGenerator)
        }
    }
}

/// Explain a score. Never fails: generator errors yield the fallback text.
pub async fn explain(skill_ids: &[i64], result: &ScoreResult, generator: &dyn Generator) -> String {
    match generator.generate(skill_ids, result).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(generator = generator.name(), "generator returned empty text, using fallback");
            fallback_text(result)
        }
        Err(e) => {
            warn!(generator = generator.name(), error = %e, "generator failed, using fallback");
            fallback_text(result)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Generator with a canned outcome that counts its calls
    pub struct ScriptedGenerator {
        pub reply: Option<String>,
        pub calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Generator for ScriptedGenerator {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn generate(
            &self,
            _skill_ids: &[i64],
            _result: &ScoreResult,
        ) -> Result<String, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .ok_or_else(|| GeneratorError::InvalidResponse("scripted failure".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedGenerator;
    use super::*;
    use std::time::Duration;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            mean_rating_of_matched: 7.25,
            factor_a: 0.725,
            factor_b: 0.4,
            factor_c: 0.5,
            percent: 60.0,
            total_ventures: 5,
            matched_ventures: 2,
        }
    }

    #[tokio::test]
    async fn test_external_text_returned_verbatim() {
        let generator = ScriptedGenerator::replying("  Looks promising.\n");
        let text = explain(&[1], &sample_result(), &generator).await;
        assert_eq!(text, "  Looks promising.\n");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_generator_falls_back() {
        let result = sample_result();
        let generator = ScriptedGenerator::failing();
        let text = explain(&[1, 4], &result, &generator).await;

        assert_eq!(text, fallback_text(&result));
        assert!(text.contains("7.25/10"));
        assert!(text.contains("2 of 5"));
        assert!(text.contains("60.00%"));
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let result = sample_result();
        let generator = ScriptedGenerator::replying("   ");
        assert_eq!(explain(&[1], &result, &generator).await, fallback_text(&result));
    }

    #[tokio::test]
    async fn test_unreachable_gemini_falls_back() {
        let mut config = GeminiConfig::new("test-key");
        config.base_url = "http://127.0.0.1:9".to_string();
        config.timeout = Duration::from_secs(2);
        let generator = build_generator(Some(config));
        assert_eq!(generator.name(), "gemini");

        let result = sample_result();
        let text = explain(&[1], &result, generator.as_ref()).await;
        assert_eq!(text, fallback_text(&result));
    }

    #[test]
    fn test_no_credential_selects_local() {
        assert_eq!(build_generator(None).name(), "local");
    }

    #[test]
    fn test_bad_credential_selects_local() {
        assert_eq!(build_generator(Some(GeminiConfig::new(""))).name(), "local");
    }
}
