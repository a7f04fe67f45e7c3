use super::config::ScoringConfig;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let weights = config.weights();

    for (name, value) in [
        ("quality_weight", weights.quality),
        ("prevalence_weight", weights.prevalence),
        ("coverage_weight", weights.coverage),
    ] {
        if !value.is_finite() {
            errors.push(format!("scoring.{}: must be a finite number", name));
        } else if value < 0.0 {
            errors.push(format!("scoring.{}: must be non-negative (got {})", name, value));
        }
    }

    // Only meaningful once every weight is a finite number
    if errors.is_empty() && (weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!(
            "scoring: weights must sum to 1.0 (quality {} + prevalence {} + coverage {} = {})",
            weights.quality,
            weights.prevalence,
            weights.coverage,
            weights.sum()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
