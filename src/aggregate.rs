//! Simple statistics over fetched ventures, shared by ranking, grouping, and scoring.

use crate::api::types::{Evaluation, Venture};

/// Ratings that are finite numbers. Missing or malformed ratings are skipped, not zeroed.
pub fn valid_ratings(evaluations: &[Evaluation]) -> Vec<f64> {
    evaluations
        .iter()
        .filter_map(|e| e.rating)
        .filter(|r| r.is_finite())
        .collect()
}

/// Arithmetic mean of the valid ratings; 0.0 when there are none.
pub fn mean_rating(evaluations: &[Evaluation]) -> f64 {
    mean(&valid_ratings(evaluations)).unwrap_or(0.0)
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedVenture {
    pub name: String,
    pub mean_rating: f64,
    pub skill_names: Vec<String>,
}

/// Ventures ordered by mean rating, best first. Ties keep fetch order.
pub fn rank_ventures(ventures: &[Venture]) -> Vec<RankedVenture> {
    let mut ranked: Vec<RankedVenture> = ventures
        .iter()
        .map(|v| RankedVenture {
            name: v.name.clone(),
            mean_rating: mean_rating(&v.evaluations),
            skill_names: v.skill_names(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationGroup {
    pub name: String,
    /// Every evaluation the venture has, rated or not
    pub evaluation_count: usize,
    /// `None` when no evaluation carries a valid rating
    pub mean_rating: Option<f64>,
}

pub fn group_evaluations(ventures: &[Venture]) -> Vec<EvaluationGroup> {
    ventures
        .iter()
        .map(|v| EvaluationGroup {
            name: v.name.clone(),
            evaluation_count: v.evaluations.len(),
            mean_rating: mean(&valid_ratings(&v.evaluations)),
        })
        .collect()
}
