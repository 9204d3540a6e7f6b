//! Read and write operations for the `stores` seed catalog.

use sqlx::PgPool;

use crate::DbError;

/// One persisted catalog store.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: i64,
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
    /// Serialized list of category labels.
    pub categories: serde_json::Value,
    /// Serialized per-day hours map.
    pub hours: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// A store to insert or refresh in the catalog.
#[derive(Debug, Clone)]
pub struct NewStore {
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

const STORE_COLUMNS: &str = "id, place_id, name, address, phone, website, \
     latitude, longitude, price_score, health_score, rating, \
     categories, hours, created_at, updated_at";

/// List catalog stores ordered by name.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_stores(pool: &PgPool, limit: i64) -> Result<Vec<StoreRow>, sqlx::Error> {
    sqlx::query_as::<_, StoreRow>(&format!(
        "SELECT {STORE_COLUMNS} FROM stores ORDER BY name LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Fetch one catalog store by its external place identifier.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row matches, or [`DbError::Sqlx`]
/// if the query fails.
pub async fn get_store_by_place_id(pool: &PgPool, place_id: &str) -> Result<StoreRow, DbError> {
    sqlx::query_as::<_, StoreRow>(&format!(
        "SELECT {STORE_COLUMNS} FROM stores WHERE place_id = $1"
    ))
    .bind(place_id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)
}

/// Insert new catalog stores and refresh existing ones.
///
/// Returns `(new_count, updated_count)`. Uses a single
/// `INSERT … SELECT * FROM UNNEST(…) ON CONFLICT` so the whole batch is
/// upserted in one round-trip regardless of size.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn upsert_stores(
    pool: &PgPool,
    stores: &[NewStore],
) -> Result<(u64, u64), sqlx::Error> {
    if stores.is_empty() {
        return Ok((0, 0));
    }

    // Collect each column into a parallel Vec for UNNEST binding.
    let mut place_ids: Vec<String> = Vec::with_capacity(stores.len());
    let mut names: Vec<String> = Vec::with_capacity(stores.len());
    let mut addresses: Vec<String> = Vec::with_capacity(stores.len());
    let mut phones: Vec<Option<String>> = Vec::with_capacity(stores.len());
    let mut websites: Vec<Option<String>> = Vec::with_capacity(stores.len());
    let mut latitudes: Vec<f64> = Vec::with_capacity(stores.len());
    let mut longitudes: Vec<f64> = Vec::with_capacity(stores.len());
    let mut price_scores: Vec<i16> = Vec::with_capacity(stores.len());
    let mut health_scores: Vec<i16> = Vec::with_capacity(stores.len());
    let mut ratings: Vec<f64> = Vec::with_capacity(stores.len());
    let mut categories: Vec<serde_json::Value> = Vec::with_capacity(stores.len());
    let mut hours: Vec<serde_json::Value> = Vec::with_capacity(stores.len());

    for store in stores {
        place_ids.push(store.place_id.clone());
        names.push(store.name.clone());
        addresses.push(store.address.clone());
        phones.push(store.phone.clone());
        websites.push(store.website.clone());
        latitudes.push(store.latitude);
        longitudes.push(store.longitude);
        price_scores.push(store.price_score);
        health_scores.push(store.health_score);
        ratings.push(store.rating);
        categories.push(store.categories.clone());
        hours.push(store.hours.clone());
    }

    let rows: Vec<bool> = sqlx::query_scalar::<_, bool>(
        "INSERT INTO stores \
             (place_id, name, address, phone, website, latitude, longitude, \
              price_score, health_score, rating, categories, hours) \
         SELECT * FROM UNNEST(\
              $1::text[], $2::text[], $3::text[], $4::text[], $5::text[], \
              $6::float8[], $7::float8[], $8::int2[], $9::int2[], \
              $10::float8[], $11::jsonb[], $12::jsonb[]) \
         ON CONFLICT (place_id) DO UPDATE SET \
             updated_at   = NOW(), \
             name         = EXCLUDED.name, \
             address      = EXCLUDED.address, \
             phone        = EXCLUDED.phone, \
             website      = EXCLUDED.website, \
             latitude     = EXCLUDED.latitude, \
             longitude    = EXCLUDED.longitude, \
             price_score  = EXCLUDED.price_score, \
             health_score = EXCLUDED.health_score, \
             rating       = EXCLUDED.rating, \
             categories   = EXCLUDED.categories, \
             hours        = EXCLUDED.hours \
         RETURNING (xmax = 0) AS is_new",
    )
    .bind(&place_ids)
    .bind(&names)
    .bind(&addresses)
    .bind(&phones)
    .bind(&websites)
    .bind(&latitudes)
    .bind(&longitudes)
    .bind(&price_scores)
    .bind(&health_scores)
    .bind(&ratings)
    .bind(&categories)
    .bind(&hours)
    .fetch_all(pool)
    .await?;

    let new_count = rows.iter().filter(|is_new| **is_new).count() as u64;
    let updated_count = rows.len() as u64 - new_count;
    Ok((new_count, updated_count))
}
