use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::RecordSource;
use super::error::ApiError;
use super::types::{NewVenture, Venture, VentureIndex};

/// Upper bound on detail lookups in flight at once
const MAX_CONCURRENT_DETAILS: usize = 10;

/// Fetch every venture listed on the first page of the index, fully resolved.
///
/// Never fails: an unreachable or unusable index yields an empty list, and
/// entries whose detail lookup fails are skipped.
pub async fn fetch_all_ventures(source: &dyn RecordSource, index_path: &str) -> Vec<Venture> {
    fetch_ventures(source, index_path, None).await
}

/// Like [`fetch_all_ventures`], but only resolves the first `limit` index entries
pub async fn list_ventures(
    source: &dyn RecordSource,
    index_path: &str,
    limit: usize,
) -> Vec<Venture> {
    fetch_ventures(source, index_path, Some(limit)).await
}

/// Create a venture. The service response is handed back untouched.
pub async fn register_venture(
    source: &dyn RecordSource,
    index_path: &str,
    venture: &NewVenture,
) -> Result<Value, ApiError> {
    let body = serde_json::to_value(venture)?;
    source.post_json(index_path, &body).await
}

async fn fetch_index(source: &dyn RecordSource, index_path: &str) -> Result<VentureIndex, ApiError> {
    let value = source.get_json(index_path, &[]).await?;
    Ok(serde_json::from_value(value)?)
}

async fn fetch_venture(source: &dyn RecordSource, path: &str) -> Result<Venture, ApiError> {
    let value = source.get_json(path, &[]).await?;
    // An empty record carries nothing to score and would only inflate the total
    if value.as_object().is_some_and(|m| m.is_empty()) {
        return Err(ApiError::EmptyRecord(path.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

async fn fetch_ventures(
    source: &dyn RecordSource,
    index_path: &str,
    limit: Option<usize>,
) -> Vec<Venture> {
    let index = match fetch_index(source, index_path).await {
        Ok(index) => index,
        Err(e) => {
            warn!(path = index_path, error = %e, "venture index unavailable");
            return Vec::new();
        }
    };

    let entries: Vec<_> = index
        .items
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    let detail_paths: Vec<String> = entries
        .iter()
        .filter_map(|entry| entry.self_path().map(str::to_string))
        .collect();

    if detail_paths.len() < entries.len() {
        debug!(
            skipped = entries.len() - detail_paths.len(),
            "index entries without a self link"
        );
    }

    // buffered() keeps index order while running lookups concurrently
    let results: Vec<(String, Result<Venture, ApiError>)> = stream::iter(detail_paths)
        .map(|path| async move {
            let result = fetch_venture(source, &path).await;
            (path, result)
        })
        .buffered(MAX_CONCURRENT_DETAILS)
        .collect()
        .await;

    let mut ventures = Vec::with_capacity(results.len());
    for (path, result) in results {
        match result {
            Ok(venture) => ventures.push(venture),
            Err(e) => warn!(path = %path, error = %e, "skipping venture, detail lookup failed"),
        }
    }

    debug!(resolved = ventures.len(), "fetched ventures");
    ventures
}
