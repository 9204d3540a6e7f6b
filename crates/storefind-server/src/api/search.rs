use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use storefind_core::SearchResult;
use storefind_engine::EngineError;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    /// Free-form location text; a five-digit postal token is extracted
    /// when present, otherwise the raw text goes to the resolver.
    pub location: String,
    pub item: String,
}

pub(super) async fn search_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let location = params.location.trim();
    let item = params.item.trim();

    if location.len() < 3 || location.len() > 200 {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "location must be between 3 and 200 characters",
        ));
    }
    if item.is_empty() || item.len() > 100 {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "item must be between 1 and 100 characters",
        ));
    }

    let postal_code = extract_postal_code(location).unwrap_or(location);
    tracing::debug!(location, postal_code, item, "running store search");

    let result = state
        .engine
        .search(postal_code, item)
        .await
        .map_err(|e| map_engine_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_engine_error(request_id: String, error: &EngineError) -> ApiError {
    match error {
        EngineError::GeocodeFailure { postal_code } => {
            tracing::info!(postal_code, "search rejected: location not recognized");
            ApiError::new(request_id, "validation_error", "location not recognized")
        }
        EngineError::EmptyCandidateSet => {
            tracing::error!(error = %error, "selection ran on an empty candidate set");
            ApiError::new(request_id, "internal_error", "store search failed")
        }
    }
}

/// Extract the first standalone five-digit run from free-form location
/// text ("Saint Louis 63101" → "63101"). Runs longer than five digits do
/// not qualify.
fn extract_postal_code(location: &str) -> Option<&str> {
    let bytes = location.as_bytes();
    let mut start = None;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            if i - s == 5 {
                return Some(&location[s..i]);
            }
        }
    }
    if let Some(s) = start {
        if bytes.len() - s == 5 {
            return Some(&location[s..]);
        }
    }
    None
}
