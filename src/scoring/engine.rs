use std::collections::HashSet;
use tracing::warn;

use super::config::{ScoringConfig, Weights};
use super::factors;
use super::validation::validate_scoring;
use crate::api::types::Venture;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Mean of the matched ventures' mean ratings, on the 0..=10 scale
    pub mean_rating_of_matched: f64,
    pub factor_a: f64,
    pub factor_b: f64,
    pub factor_c: f64,
    /// Weighted combination, 0..=100, rounded to two decimals
    pub percent: f64,
    pub total_ventures: usize,
    pub matched_ventures: usize,
}

/// Score a skill request against the fetched ventures.
///
/// Returns `None` when there are no ventures to score against, so callers can
/// tell "could not compute" apart from a computed 0%. Weights that fail
/// [`validate_scoring`] are replaced by the defaults.
pub fn calculate_score(
    skill_ids: &[i64],
    ventures: &[Venture],
    config: &ScoringConfig,
) -> Option<ScoreResult> {
    if ventures.is_empty() {
        return None;
    }

    let requested: HashSet<i64> = skill_ids.iter().copied().collect();
    let matched: Vec<&Venture> = ventures
        .iter()
        .filter(|v| v.has_any_skill(&requested))
        .collect();

    let (mean_rating_of_matched, factor_a) = factors::quality(&matched);
    let factor_b = factors::prevalence(matched.len(), ventures.len());
    let factor_c = factors::coverage(&matched, skill_ids);

    Some(ScoreResult {
        mean_rating_of_matched,
        factor_a,
        factor_b,
        factor_c,
        percent: combine(&effective_weights(config), factor_a, factor_b, factor_c),
        total_ventures: ventures.len(),
        matched_ventures: matched.len(),
    })
}

fn effective_weights(config: &ScoringConfig) -> Weights {
    match validate_scoring(config) {
        Ok(()) => config.weights(),
        Err(errors) => {
            warn!(?errors, "invalid scoring weights, using defaults");
            Weights::default()
        }
    }
}

/// Weighted sum of the clamped factors as a percentage, rounded to two decimals
pub fn combine(weights: &Weights, factor_a: f64, factor_b: f64, factor_c: f64) -> f64 {
    let combined = weights.quality * factors::clamp_unit(factor_a)
        + weights.prevalence * factors::clamp_unit(factor_b)
        + weights.coverage * factors::clamp_unit(factor_c);
    round2(combined * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
