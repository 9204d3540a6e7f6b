//! HTTP client for the external Google Maps capabilities used by the
//! search pipeline: postal-code geocoding and nearby places search.

mod client;
mod error;
mod types;

pub use client::{ClientConfig, MapsClient};
pub use error::MapsError;
pub use types::{
    CandidateGeometry, GeocodedAddress, LatLng, OpeningHours, RawCandidate,
};
