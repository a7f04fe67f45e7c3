use async_trait::async_trait;

use super::error::GeneratorError;
use super::Generator;
use crate::scoring::{ScoreResult, RATING_SCALE};

/// Deterministic explanation built from the score alone
pub fn fallback_text(result: &ScoreResult) -> String {
    format!(
        "Based on the average rating of matching ventures ({mean:.2}/{scale}), the presence of these \
         skills in {matched} of {total} ventures and the average skill coverage, the estimated \
         success rate is {percent:.2}%.\n\
         To improve the odds: validate the product with customers quickly, prioritize the skills \
         most present in highly-rated ventures, and consider adding missing skills that show up \
         often in well-rated ventures.",
        mean = result.mean_rating_of_matched,
        scale = RATING_SCALE,
        matched = result.matched_ventures,
        total = result.total_ventures,
        percent = result.percent,
    )
}

/// Generator used when no external service is configured. Never fails.
pub struct LocalFallbackGenerator;

#[async_trait]
impl Generator for LocalFallbackGenerator {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate(
        &self,
        _skill_ids: &[i64],
        result: &ScoreResult,
    ) -> Result<String, GeneratorError> {
        Ok(fallback_text(result))
    }
}
