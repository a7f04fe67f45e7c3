use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::aggregate::{EvaluationGroup, RankedVenture};
use crate::api::types::Skill;
use crate::scoring::{ScoreResult, Weights, RATING_SCALE};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// "81.50%"
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Score summary with each factor and its weight
pub fn format_score_report(result: &ScoreResult, weights: &Weights, use_colors: bool) -> String {
    let headline = format!("Success rate: {}", format_percent(result.percent));
    let headline = if use_colors {
        headline.bold().to_string()
    } else {
        headline
    };

    let rows = [
        (
            "Quality",
            result.factor_a,
            weights.quality,
            format!(
                "mean rating {:.2}/{}",
                result.mean_rating_of_matched, RATING_SCALE
            ),
        ),
        (
            "Prevalence",
            result.factor_b,
            weights.prevalence,
            format!(
                "{} of {} ventures",
                result.matched_ventures, result.total_ventures
            ),
        ),
        (
            "Coverage",
            result.factor_c,
            weights.coverage,
            "requested skills held".to_string(),
        ),
    ];

    let mut lines = vec![headline];
    for (label, value, weight, detail) in rows {
        let line = format!(
            "  {:<11}{:.3} x {:.2}  ({})",
            label, value, weight, detail
        );
        lines.push(if use_colors {
            line.dimmed().to_string()
        } else {
            line
        });
    }
    lines.join("\n")
}

/// Ranked ventures, one entry per venture with its skills on a second line
pub fn format_ranking(ranked: &[RankedVenture], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No ventures found.".to_string();
    }

    let term_width = get_terminal_width();
    let indent = "   ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, venture)| {
            let index_str = format!("{:>2}.", idx + 1);
            let rating = format!("{:.2}", venture.mean_rating);
            let skills = if venture.skill_names.is_empty() {
                "None".to_string()
            } else {
                venture.skill_names.join(", ")
            };
            let skills_line = format!("Skills: {}", skills);
            let skills_line = match term_width {
                Some(width) if width > indent.len() + 20 => {
                    truncate(&skills_line, width - indent.len())
                }
                _ => skills_line,
            };

            if use_colors {
                format!(
                    "{} {} - Rating: {}\n{}{}",
                    index_str.dimmed(),
                    venture.name.bold(),
                    rating.cyan(),
                    indent,
                    skills_line
                )
            } else {
                format!(
                    "{} {} - Rating: {}\n{}{}",
                    index_str, venture.name, rating, indent, skills_line
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per venture: evaluation count and mean, or N/A without valid ratings
pub fn format_evaluation_groups(groups: &[EvaluationGroup]) -> String {
    if groups.is_empty() {
        return "No ventures found.".to_string();
    }

    groups
        .iter()
        .map(|g| {
            let mean = g
                .mean_rating
                .map(|m| format!("{:.2}", m))
                .unwrap_or_else(|| "N/A".to_string());
            let noun = if g.evaluation_count == 1 {
                "evaluation"
            } else {
                "evaluations"
            };
            format!(
                "{} - {} {} - mean: {}",
                g.name, g.evaluation_count, noun, mean
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Skill catalogue followed by a total line
pub fn format_skills(skills: &[Skill], use_colors: bool) -> String {
    if skills.is_empty() {
        return "No skills found.".to_string();
    }

    let mut lines: Vec<String> = skills
        .iter()
        .map(|s| {
            let id = s
                .skill_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "?".to_string());
            if use_colors {
                format!("{}. {} ({})", id.dimmed(), s.name, s.kind.cyan())
            } else {
                format!("{}. {} ({})", id, s.name, s.kind)
            }
        })
        .collect();
    lines.push(String::new());
    lines.push(format!("Total listed: {}", skills.len()));
    lines.join("\n")
}
