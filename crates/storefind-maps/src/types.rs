//! Wire types for the geocoding and places-search responses.

use serde::Deserialize;

/// A postal code resolved by the geocoding capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One raw result from a nearby-search query, prior to deduplication and
/// filtering. Ephemeral; consumed during aggregation only.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCandidate {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    /// Provider type tags, e.g. `"supermarket"`, `"food"`.
    #[serde(default)]
    pub types: Vec<String>,
    /// Short address; nearby search returns this instead of
    /// `formatted_address`.
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub geometry: CandidateGeometry,
    pub rating: Option<f64>,
    pub opening_hours: Option<OpeningHours>,
}

impl RawCandidate {
    /// Best-effort display address; empty when the provider sent neither
    /// form.
    #[must_use]
    pub fn address(&self) -> String {
        self.formatted_address
            .clone()
            .or_else(|| self.vicinity.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateGeometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Opening hours as per-weekday description strings, e.g.
/// `"Monday: 8:00 AM – 10:00 PM"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default, alias = "weekdayDescriptions")]
    pub weekday_text: Vec<String>,
}

// ---------------------------------------------------------------------------
// Response envelopes (crate-private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub geometry: CandidateGeometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<RawCandidate>,
}
