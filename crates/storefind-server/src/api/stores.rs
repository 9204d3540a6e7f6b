use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ListStoresParams {
    pub limit: Option<i64>,
}

/// One store from the pre-seeded catalog. `price_score` is an
/// affordability reputation, not a price.
#[derive(Debug, Serialize)]
pub(super) struct CatalogStoreItem {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub price_score: i16,
    pub health_score: i16,
    pub rating: f64,
    pub categories: serde_json::Value,
    pub hours: serde_json::Value,
}

pub(super) async fn list_catalog_stores(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ListStoresParams>,
) -> Result<Json<ApiResponse<Vec<CatalogStoreItem>>>, ApiError> {
    let limit = normalize_limit(params.limit);
    let rows = storefind_db::list_stores(&state.pool, limit)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &storefind_db::DbError::from(e)))?;

    let data = rows
        .into_iter()
        .map(|row| CatalogStoreItem {
            place_id: row.place_id,
            name: row.name,
            address: row.address,
            phone: row.phone,
            website: row.website,
            latitude: row.latitude,
            longitude: row.longitude,
            price_score: row.price_score,
            health_score: row.health_score,
            rating: row.rating,
            categories: row.categories,
            hours: row.hours,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
