//! Canonical domain types shared across the search pipeline.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A postal code resolved to coordinates, with city/state when the
/// geocoding source provided them.
///
/// Produced once per search and never mutated afterwards; the resolver
/// caches it keyed by the exact postal code string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub postal_code: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl ResolvedLocation {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Placeholder used for every weekday when the search capability returned
/// no opening hours.
pub const HOURS_UNAVAILABLE: &str = "Hours not available";

/// Opening hours as one free-form string per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for StoreHours {
    fn default() -> Self {
        let unavailable = || HOURS_UNAVAILABLE.to_string();
        Self {
            monday: unavailable(),
            tuesday: unavailable(),
            wednesday: unavailable(),
            thursday: unavailable(),
            friday: unavailable(),
            saturday: unavailable(),
            sunday: unavailable(),
        }
    }
}

/// The engine's normalized store record, independent of which external
/// capability produced the raw data.
///
/// `distance_miles` is always relative to the [`ResolvedLocation`] of the
/// search that produced this record, so a store is not reusable across
/// searches from a different origin. `price_score` is a *reputation* proxy
/// for affordability (10 = typically budget-friendly), not observed
/// pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalStore {
    /// External identifier from the places-search capability.
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Great-circle distance from the search origin, rounded to a tenth
    /// of a mile.
    pub distance_miles: f64,
    /// Affordability reputation, 1–10. Higher = more budget-friendly.
    pub price_score: u8,
    /// Health reputation, 1–10. Higher = healthier-leaning assortment.
    pub health_score: u8,
    /// Star rating, 1–5.
    pub rating: f64,
    pub categories: Vec<String>,
    pub hours: StoreHours,
}

impl CanonicalStore {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// The three recommendations for one search, plus the inputs they were
/// computed from.
///
/// The three slots may reference the same store when one store wins more
/// than one criterion; consumers rendering a combined list must
/// deduplicate by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub shortest: CanonicalStore,
    pub healthiest: CanonicalStore,
    pub budget_friendly: CanonicalStore,
    pub searched_item: String,
    pub user_location: ResolvedLocation,
}

/// Coarse reliability label for an availability estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// Heuristic estimate of how likely a store is to carry a searched item.
///
/// `likelihood` never exceeds 0.95 — without real inventory data the
/// estimator does not report certainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEstimate {
    pub likelihood: f64,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}
