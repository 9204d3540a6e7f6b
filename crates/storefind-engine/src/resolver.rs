//! Postal-code resolution with caching and offline fallback.
//!
//! Resolution order: in-process cache, then the external geocoding
//! capability, then a static table of well-known postal codes. Repeated
//! failures short-circuit through the cache and static table rather than
//! generating fresh external calls.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use storefind_core::ResolvedLocation;
use storefind_maps::MapsClient;

use crate::error::EngineError;

/// Upper bound on cached postal codes. Postal codes are a small, slowly
/// changing keyspace, but a long-lived process must not grow without
/// bound; past the cap the oldest insertion is evicted.
const MAX_CACHE_ENTRIES: usize = 4096;

/// Resolves postal codes to coordinates, owning its cache.
///
/// Cache writes are idempotent (the same postal code always maps to the
/// same location), so concurrent resolution of one postal code at worst
/// duplicates an external call; readers never observe partial entries.
pub struct GeocodeResolver {
    maps: MapsClient,
    cache: Mutex<Cache>,
}

struct Cache {
    entries: HashMap<String, ResolvedLocation>,
    insertion_order: VecDeque<String>,
}

impl GeocodeResolver {
    #[must_use]
    pub fn new(maps: MapsClient) -> Self {
        Self {
            maps,
            cache: Mutex::new(Cache {
                entries: HashMap::new(),
                insertion_order: VecDeque::new(),
            }),
        }
    }

    /// Resolve a postal code to a location.
    ///
    /// External geocoding *errors* (network failure, quota, bad status)
    /// are logged and demoted to a miss so the static table still gets a
    /// chance; only a miss across all three sources fails. Successful
    /// lookups from either source are cached.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GeocodeFailure`] when no source produced
    /// coordinates. Retrying the same postal code will not change the
    /// outcome.
    pub async fn resolve(&self, postal_code: &str) -> Result<ResolvedLocation, EngineError> {
        if let Some(cached) = self.cache_get(postal_code) {
            tracing::debug!(postal_code, "geocode cache hit");
            return Ok(cached);
        }

        match self.maps.geocode(postal_code).await {
            Ok(Some(geocoded)) => {
                let location = ResolvedLocation {
                    latitude: geocoded.latitude,
                    longitude: geocoded.longitude,
                    postal_code: postal_code.to_owned(),
                    city: geocoded.city,
                    state: geocoded.state,
                };
                self.cache_put(location.clone());
                return Ok(location);
            }
            Ok(None) => {
                tracing::debug!(postal_code, "external geocoding found no match");
            }
            Err(error) => {
                tracing::warn!(postal_code, error = %error, "external geocoding failed; trying static fallback");
            }
        }

        if let Some(location) = lookup_static(postal_code) {
            tracing::info!(postal_code, "resolved via static fallback table");
            self.cache_put(location.clone());
            return Ok(location);
        }

        Err(EngineError::GeocodeFailure {
            postal_code: postal_code.to_owned(),
        })
    }

    fn cache_get(&self, postal_code: &str) -> Option<ResolvedLocation> {
        let cache = self.cache.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        cache.entries.get(postal_code).cloned()
    }

    fn cache_put(&self, location: ResolvedLocation) {
        let mut cache = self.cache.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if cache.entries.contains_key(&location.postal_code) {
            // Idempotent overwrite with equal data; keep the original slot
            // in the eviction order.
            cache.entries.insert(location.postal_code.clone(), location);
            return;
        }
        while cache.entries.len() >= MAX_CACHE_ENTRIES {
            match cache.insertion_order.pop_front() {
                Some(oldest) => {
                    cache.entries.remove(&oldest);
                }
                None => break,
            }
        }
        cache.insertion_order.push_back(location.postal_code.clone());
        cache.entries.insert(location.postal_code.clone(), location);
    }
}

/// Offline fallback table of well-known US postal codes.
const STATIC_POSTAL_CODES: &[(&str, f64, f64, &str, &str)] = &[
    ("10001", 40.7505, -73.9934, "New York", "NY"),
    ("90210", 34.0901, -118.4065, "Beverly Hills", "CA"),
    ("60601", 41.8781, -87.6298, "Chicago", "IL"),
    ("33101", 25.7617, -80.1918, "Miami", "FL"),
    ("77001", 29.7604, -95.3698, "Houston", "TX"),
    ("85001", 33.4484, -112.0740, "Phoenix", "AZ"),
    ("19101", 39.9526, -75.1652, "Philadelphia", "PA"),
    ("92101", 32.7157, -117.1611, "San Diego", "CA"),
    ("78701", 30.2672, -97.7431, "Austin", "TX"),
    ("98101", 47.6062, -122.3321, "Seattle", "WA"),
    ("02101", 42.3601, -71.0589, "Boston", "MA"),
    ("30301", 33.7490, -84.3880, "Atlanta", "GA"),
    ("80201", 39.7392, -104.9903, "Denver", "CO"),
    ("97201", 45.5152, -122.6784, "Portland", "OR"),
    ("89101", 36.1699, -115.1398, "Las Vegas", "NV"),
    ("84101", 40.7608, -111.8910, "Salt Lake City", "UT"),
    ("37201", 36.1627, -86.7816, "Nashville", "TN"),
    ("32801", 28.5383, -81.3792, "Orlando", "FL"),
    ("28201", 35.2271, -80.8431, "Charlotte", "NC"),
    ("63101", 38.6270, -90.1994, "St. Louis", "MO"),
    ("63368", 38.8108, -90.7143, "St. Peters", "MO"),
];

fn lookup_static(postal_code: &str) -> Option<ResolvedLocation> {
    STATIC_POSTAL_CODES
        .iter()
        .find(|(code, ..)| *code == postal_code)
        .map(|&(code, latitude, longitude, city, state)| ResolvedLocation {
            latitude,
            longitude,
            postal_code: code.to_owned(),
            city: Some(city.to_owned()),
            state: Some(state.to_owned()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_table_knows_st_louis() {
        let location = lookup_static("63101").expect("63101 should be in the static table");
        assert_eq!(location.city.as_deref(), Some("St. Louis"));
        assert_eq!(location.state.as_deref(), Some("MO"));
        assert!((location.latitude - 38.6270).abs() < 1e-6);
    }

    #[test]
    fn static_table_misses_unknown_codes() {
        assert!(lookup_static("99999").is_none());
        assert!(lookup_static("").is_none());
    }

    #[test]
    fn static_table_requires_exact_match() {
        // Prefix or substring matches must not resolve.
        assert!(lookup_static("631").is_none());
        assert!(lookup_static("631013").is_none());
    }
}
