use tracing::{debug, warn};

use super::client::RecordSource;
use super::error::ApiError;
use super::types::{Skill, SkillPage};

/// Guard against a service that ignores the paging parameters
const MAX_SKILL_PAGES: usize = 1000;

/// Page through the skill catalogue until a page comes back shorter than `page_size`.
///
/// A failed page ends the walk; whatever was collected before it is returned.
pub async fn list_all_skills(
    source: &dyn RecordSource,
    skills_path: &str,
    page_size: usize,
) -> Vec<Skill> {
    let page_size = page_size.max(1);
    let mut skills = Vec::new();

    for page in 1..=MAX_SKILL_PAGES {
        let result = fetch_skill_page(source, skills_path, page, page_size).await;
        let page_data = match result {
            Ok(p) => p,
            Err(e) => {
                warn!(page, error = %e, "skill page unavailable");
                break;
            }
        };

        let count = page_data.items.len();
        debug!(page, count, total = ?page_data.total_items, "fetched skill page");
        skills.extend(page_data.items);

        if count < page_size {
            break;
        }
    }

    skills
}

async fn fetch_skill_page(
    source: &dyn RecordSource,
    skills_path: &str,
    page: usize,
    page_size: usize,
) -> Result<SkillPage, ApiError> {
    let query = [("page", page.to_string()), ("pageSize", page_size.to_string())];
    let value = source.get_json(skills_path, &query).await?;
    Ok(serde_json::from_value(value)?)
}
