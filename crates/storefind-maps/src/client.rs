//! HTTP client for the Google Maps geocoding and places-search endpoints.
//!
//! Wraps `reqwest` with API-key management, status-envelope checking, and
//! typed response deserialization. Both endpoints wrap their payload in a
//! JSON envelope whose `"status"` field must be `"OK"` or
//! `"ZERO_RESULTS"`; anything else surfaces as [`MapsError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::MapsError;
use crate::types::{GeocodeResponse, GeocodedAddress, PlacesResponse, RawCandidate};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "storefind/0.1 (store-search)";

/// Construction-time settings for [`MapsClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    /// Per-request timeout for geocoding calls.
    pub geocode_timeout_secs: u64,
    /// Per-request timeout for nearby-search calls. Each category query in
    /// a fan-out carries this timeout independently.
    pub places_timeout_secs: u64,
}

/// Client for the external geocoding and places-search capabilities.
///
/// Use [`MapsClient::new`] for production or [`MapsClient::with_base_url`]
/// to point at a mock server in tests. Cloning is cheap; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct MapsClient {
    client: Client,
    api_key: String,
    geocode_url: Url,
    places_url: Url,
    geocode_timeout: Duration,
    places_timeout: Duration,
}

impl MapsClient {
    /// Creates a new client pointed at the production Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, MapsError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MapsError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(config: ClientConfig, base_url: &str) -> Result<Self, MapsError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        let trimmed = base_url.trim_end_matches('/');
        let parse = |path: &str| -> Result<Url, MapsError> {
            Url::parse(&format!("{trimmed}/{path}")).map_err(|e| MapsError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })
        };

        Ok(Self {
            client,
            api_key: config.api_key,
            geocode_url: parse("geocode/json")?,
            places_url: parse("place/nearbysearch/json")?,
            geocode_timeout: Duration::from_secs(config.geocode_timeout_secs),
            places_timeout: Duration::from_secs(config.places_timeout_secs),
        })
    }

    /// Resolves a free-form query (typically a postal code) to coordinates,
    /// restricted to the US.
    ///
    /// Returns `Ok(None)` when the capability reports `ZERO_RESULTS` or an
    /// empty result list — "not found" is not an error at this layer.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Http`] on network failure or timeout.
    /// - [`MapsError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`MapsError::Api`] if the envelope status signals an API error.
    /// - [`MapsError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodedAddress>, MapsError> {
        let mut url = self.geocode_url.clone();
        url.query_pairs_mut()
            .append_pair("address", query)
            .append_pair("components", "country:US")
            .append_pair("key", &self.api_key);

        let context = format!("geocode({query})");
        let body = self.request_json(url, self.geocode_timeout, &context).await?;

        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: context.clone(),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(None),
            other => {
                return Err(MapsError::Api {
                    status: other.to_owned(),
                    context,
                })
            }
        }

        let Some(result) = envelope.results.into_iter().next() else {
            return Ok(None);
        };

        let mut city = None;
        let mut state = None;
        for component in &result.address_components {
            if component.types.iter().any(|t| t == "locality") {
                city = Some(component.long_name.clone());
            }
            if component
                .types
                .iter()
                .any(|t| t == "administrative_area_level_1")
            {
                state = Some(component.short_name.clone());
            }
        }

        Ok(Some(GeocodedAddress {
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
            city,
            state,
        }))
    }

    /// Runs one nearby-search query for a single category tag around the
    /// given origin.
    ///
    /// Returns an empty list on `ZERO_RESULTS`. Callers issuing several
    /// category queries fan them out independently; each call carries its
    /// own timeout.
    ///
    /// # Errors
    ///
    /// - [`MapsError::Http`] on network failure or timeout.
    /// - [`MapsError::UnexpectedStatus`] on a non-2xx HTTP status.
    /// - [`MapsError::Api`] if the envelope status signals an API error.
    /// - [`MapsError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
        category: &str,
    ) -> Result<Vec<RawCandidate>, MapsError> {
        let mut url = self.places_url.clone();
        url.query_pairs_mut()
            .append_pair("location", &format!("{latitude},{longitude}"))
            .append_pair("radius", &radius_meters.to_string())
            .append_pair("type", category)
            .append_pair("language", "en")
            .append_pair("key", &self.api_key);

        let context = format!("nearby_search(type={category})");
        let body = self.request_json(url, self.places_timeout, &context).await?;

        let envelope: PlacesResponse =
            serde_json::from_value(body).map_err(|e| MapsError::Deserialize {
                context: context.clone(),
                source: e,
            })?;

        match envelope.status.as_str() {
            "OK" => Ok(envelope.results),
            "ZERO_RESULTS" => Ok(vec![]),
            other => Err(MapsError::Api {
                status: other.to_owned(),
                context,
            }),
        }
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    async fn request_json(
        &self,
        url: Url,
        timeout: Duration,
        context: &str,
    ) -> Result<serde_json::Value, MapsError> {
        let response = self.client.get(url.clone()).timeout(timeout).send().await?;

        if !response.status().is_success() {
            return Err(MapsError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: redact_key(url.as_str()),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MapsError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Strip the API key from a URL before it lands in an error message.
fn redact_key(url: &str) -> String {
    match url.find("key=") {
        Some(start) => {
            let end = url[start..]
                .find('&')
                .map_or(url.len(), |offset| start + offset);
            format!("{}key=[redacted]{}", &url[..start], &url[end..])
        }
        None => url.to_owned(),
    }
}
