pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use config::*;
pub use factors::RATING_SCALE;
pub use engine::{calculate_score, combine, ScoreResult};
pub use validation::validate_scoring;
