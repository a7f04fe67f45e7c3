pub mod formatter;

pub use formatter::{
    format_evaluation_groups, format_percent, format_ranking, format_score_report, format_skills,
    should_use_colors,
};
