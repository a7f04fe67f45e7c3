use std::collections::HashSet;

use crate::aggregate::{mean, mean_rating};
use crate::api::types::Venture;

/// Ratings are given on a 0..=10 scale
pub const RATING_SCALE: f64 = 10.0;

/// Clamp into [0, 1]. NaN counts as no signal.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Factor A: mean of the matched ventures' mean ratings, scaled to [0, 1].
///
/// Returns `(mean_of_means, factor)`. Matched ventures without a valid rating
/// count as 0.0 in the mean.
pub fn quality(matched: &[&Venture]) -> (f64, f64) {
    let means: Vec<f64> = matched.iter().map(|v| mean_rating(&v.evaluations)).collect();
    let mean_of_means = mean(&means).unwrap_or(0.0);
    (mean_of_means, clamp_unit(mean_of_means / RATING_SCALE))
}

/// Factor B: share of all ventures that carry at least one requested skill
pub fn prevalence(matched_count: usize, total_count: usize) -> f64 {
    if total_count == 0 {
        return 0.0;
    }
    clamp_unit(matched_count as f64 / total_count as f64)
}

/// Factor C: mean fraction of the requested skills each matched venture carries.
///
/// The denominator is the request length as given, duplicates included; the
/// numerator counts distinct requested ids the venture has.
pub fn coverage(matched: &[&Venture], requested: &[i64]) -> f64 {
    if requested.is_empty() {
        return 0.0;
    }
    let wanted: HashSet<i64> = requested.iter().copied().collect();

    let ratios: Vec<f64> = matched
        .iter()
        .map(|v| {
            let have = v.skill_ids();
            if have.is_empty() {
                return 0.0;
            }
            let hits = wanted.intersection(&have).count();
            hits as f64 / requested.len() as f64
        })
        .collect();

    clamp_unit(mean(&ratios).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Evaluation, SkillRef};

    fn venture(skills: &[i64], ratings: &[f64]) -> Venture {
        Venture {
            name: "v".to_string(),
            evaluations: ratings.iter().map(|r| Evaluation::rated(*r)).collect(),
            skills: skills
                .iter()
                .map(|id| SkillRef::new(*id, "skill", "tech"))
                .collect(),
        }
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(3.0), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_quality_scales_by_rating_scale() {
        let x = venture(&[1], &[8.0, 10.0]);
        let (mean, factor) = quality(&[&x]);
        assert_eq!(mean, 9.0);
        assert!((factor - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_quality_includes_unrated_matches_as_zero() {
        let rated = venture(&[1], &[8.0]);
        let unrated = venture(&[1], &[]);
        let (mean, factor) = quality(&[&rated, &unrated]);
        assert_eq!(mean, 4.0);
        assert!((factor - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_quality_no_matches() {
        assert_eq!(quality(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_quality_clamped_for_out_of_scale_ratings() {
        let high = venture(&[1], &[50.0]);
        assert_eq!(quality(&[&high]).1, 1.0);

        let negative = venture(&[1], &[-20.0]);
        assert_eq!(quality(&[&negative]).1, 0.0);
    }

    #[test]
    fn test_prevalence() {
        assert_eq!(prevalence(1, 2), 0.5);
        assert_eq!(prevalence(0, 5), 0.0);
        assert_eq!(prevalence(0, 0), 0.0);
    }

    #[test]
    fn test_coverage_full_and_partial() {
        let full = venture(&[1, 2], &[]);
        let partial = venture(&[2, 7], &[]);
        assert_eq!(coverage(&[&full], &[1, 2]), 1.0);
        assert_eq!(coverage(&[&full, &partial], &[1, 2]), 0.75);
    }

    #[test]
    fn test_coverage_empty_request_is_zero() {
        let full = venture(&[1, 2], &[]);
        assert_eq!(coverage(&[&full], &[]), 0.0);
        assert_eq!(coverage(&[], &[]), 0.0);
    }

    #[test]
    fn test_coverage_duplicates_only_widen_denominator() {
        let v = venture(&[1], &[]);
        assert_eq!(coverage(&[&v], &[1, 1]), 0.5);
    }

    #[test]
    fn test_coverage_skillless_match_contributes_zero() {
        let with = venture(&[1], &[]);
        let without = venture(&[], &[]);
        assert_eq!(coverage(&[&with, &without], &[1]), 0.5);
    }
}
