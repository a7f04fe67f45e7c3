use serde::{Deserialize, Serialize};

pub const DEFAULT_QUALITY_WEIGHT: f64 = 0.6;
pub const DEFAULT_PREVALENCE_WEIGHT: f64 = 0.25;
pub const DEFAULT_COVERAGE_WEIGHT: f64 = 0.15;

/// Main scoring configuration.
///
/// Sets the weight of each factor in the final percentage. Every weight is
/// optional and falls back to its default; together they must sum to 1.0.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   quality_weight: 0.6
///   prevalence_weight: 0.25
///   coverage_weight: 0.15
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weight of factor A, the mean rating of matching ventures (default: 0.6)
    #[serde(default)]
    pub quality_weight: Option<f64>,

    /// Weight of factor B, the share of ventures that carry a requested skill (default: 0.25)
    #[serde(default)]
    pub prevalence_weight: Option<f64>,

    /// Weight of factor C, how many of the requested skills a matching venture covers (default: 0.15)
    #[serde(default)]
    pub coverage_weight: Option<f64>,
}

impl ScoringConfig {
    pub fn weights(&self) -> Weights {
        Weights {
            quality: self.quality_weight.unwrap_or(DEFAULT_QUALITY_WEIGHT),
            prevalence: self.prevalence_weight.unwrap_or(DEFAULT_PREVALENCE_WEIGHT),
            coverage: self.coverage_weight.unwrap_or(DEFAULT_COVERAGE_WEIGHT),
        }
    }
}

/// Resolved factor weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub quality: f64,
    pub prevalence: f64,
    pub coverage: f64,
}

impl Default for Weights {
    fn default() -> Self {
        ScoringConfig::default().weights()
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.quality + self.prevalence + self.coverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = ScoringConfig::default().weights();
        assert_eq!(weights.quality, 0.6);
        assert_eq!(weights.prevalence, 0.25);
        assert_eq!(weights.coverage, 0.15);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((Weights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
quality_weight: 0.5
prevalence_weight: 0.35
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.weights();
        assert_eq!(weights.quality, 0.5);
        assert_eq!(weights.prevalence, 0.35);
        assert_eq!(weights.coverage, DEFAULT_COVERAGE_WEIGHT);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str("age_weight: 0.1");
        assert!(result.is_err());
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig {
            quality_weight: Some(0.7),
            prevalence_weight: Some(0.2),
            coverage_weight: Some(0.1),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
