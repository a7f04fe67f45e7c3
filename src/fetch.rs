use std::time::Instant;
use tracing::{debug, info};

use crate::api::{fetch_all_ventures, RecordSource};
use crate::config::Config;
use crate::explain::{explain, Generator};
use crate::scoring::{calculate_score, ScoreResult};

/// A computed score and its explanation
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub result: ScoreResult,
    pub explanation: String,
}

/// Fetch every venture and score the requested skills against them.
///
/// `None` means there was nothing to score against: the service was
/// unreachable or holds no ventures.
pub async fn fetch_and_score(
    source: &dyn RecordSource,
    config: &Config,
    skill_ids: &[i64],
) -> Option<ScoreResult> {
    let start = Instant::now();
    let ventures = fetch_all_ventures(source, config.ventures_path()).await;
    debug!(count = ventures.len(), elapsed = ?start.elapsed(), "ventures fetched");

    let result = calculate_score(skill_ids, &ventures, &config.scoring());
    if let Some(ref r) = result {
        info!(
            matched = r.matched_ventures,
            total = r.total_ventures,
            percent = r.percent,
            "score computed"
        );
    }
    result
}

/// Full request: fetch, score, and explain. The generator is only consulted
/// when a score could be computed.
pub async fn assess(
    source: &dyn RecordSource,
    config: &Config,
    generator: &dyn Generator,
    skill_ids: &[i64],
) -> Option<Assessment> {
    let result = fetch_and_score(source, config, skill_ids).await?;
    let explanation = explain(skill_ids, &result, generator).await;
    Some(Assessment {
        result,
        explanation,
    })
}
