pub mod client;
pub mod error;
pub mod skills;
pub mod types;
pub mod ventures;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{HttpSource, RecordSource};
pub use error::ApiError;
pub use skills::list_all_skills;
pub use types::{Evaluation, NewVenture, Skill, SkillRef, Venture};
pub use ventures::{fetch_all_ventures, list_ventures, register_venture};
