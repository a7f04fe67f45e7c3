use crate::scoring::{ScoreResult, RATING_SCALE};

/// Prompt sent to an external generator. Carries the request and every score field.
pub fn build_prompt(skill_ids: &[i64], result: &ScoreResult) -> String {
    let ids: Vec<String> = skill_ids.iter().map(|id| id.to_string()).collect();
    format!(
        "You are an assistant that assesses how likely a new business is to succeed. \
         The user picked the skills with these ids: [{ids}].\n\n\
         Computed data:\n\
         - Mean rating (0 to {scale}) of ventures that have these skills: {mean}\n\
         - Quality factor (mean rating scaled to 0..1): {a:.4}\n\
         - Share of ventures that have these skills: {b:.4}\n\
         - Average coverage of the requested skills: {c:.4}\n\
         - Ventures with at least one requested skill: {matched} of {total}\n\n\
         Suggested final rate: {percent}%.\n\n\
         Write a short explanation (3-5 sentences) of what these metrics mean and \
         practical recommendations to improve the odds of success.",
        ids = ids.join(", "),
        scale = RATING_SCALE,
        mean = result.mean_rating_of_matched,
        a = result.factor_a,
        b = result.factor_b,
        c = result.factor_c,
        matched = result.matched_ventures,
        total = result.total_ventures,
        percent = result.percent,
    )
}
