use axum::{extract::Query, Extension, Json};
use serde::Deserialize;
use storefind_core::AvailabilityEstimate;
use storefind_engine::availability::estimate;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AvailabilityParams {
    pub store: String,
    pub item: String,
}

/// Heuristic availability estimate for one store/item pair. Pure
/// computation; no external calls.
pub(super) async fn estimate_availability(
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<ApiResponse<AvailabilityEstimate>>, ApiError> {
    let store = params.store.trim();
    let item = params.item.trim();

    if store.is_empty() || store.len() > 200 {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "store must be between 1 and 200 characters",
        ));
    }
    if item.is_empty() || item.len() > 100 {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "item must be between 1 and 100 characters",
        ));
    }

    Ok(Json(ApiResponse {
        data: estimate(store, item),
        meta: ResponseMeta::new(req_id.0),
    }))
}
