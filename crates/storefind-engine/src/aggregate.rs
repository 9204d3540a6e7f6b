//! Candidate aggregation: multi-category fan-out against the places
//! capability, deduplication, filtering, and conversion to canonical
//! stores.

use std::collections::HashSet;

use storefind_core::{CanonicalStore, Coordinate, ResolvedLocation, StoreHours};
use storefind_maps::{MapsClient, RawCandidate};

use crate::categorize::categorize;
use crate::distance::{distance_miles, round_to_tenth};
use crate::filter::is_grocery_relevant;

/// Category tags queried per search. One query per tag, because the
/// capability's categorization of real-world retailers is inconsistent —
/// merging several tag queries is the only way to get acceptable recall.
pub const CATEGORY_TAGS: &[&str] = &[
    "grocery_or_supermarket",
    "supermarket",
    "food",
    "store",
    "department_store",
    "general_contractor",
    "establishment",
    "point_of_interest",
];

/// Rating assigned when the capability returned none.
const DEFAULT_RATING: f64 = 3.5;

const METERS_PER_MILE: f64 = 1609.34;

/// Fetch, merge, deduplicate, filter, and convert candidates around the
/// origin. Never fails: a failed or timed-out category query is logged
/// and skipped, degrading recall but not aborting the search. May return
/// an empty list.
pub async fn aggregate(
    maps: &MapsClient,
    origin: &ResolvedLocation,
    radius_miles: f64,
) -> Vec<CanonicalStore> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let radius_meters = (radius_miles * METERS_PER_MILE).round().max(1.0) as u32;

    // Independent queries; fan out concurrently and merge afterwards.
    let queries = CATEGORY_TAGS.iter().map(|tag| async move {
        let outcome = maps
            .nearby_search(origin.latitude, origin.longitude, radius_meters, tag)
            .await;
        (*tag, outcome)
    });
    let responses = futures::future::join_all(queries).await;

    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut stores = Vec::new();

    for (tag, outcome) in responses {
        let candidates = match outcome {
            Ok(candidates) => candidates,
            Err(error) => {
                tracing::warn!(category = tag, error = %error, "category query failed; continuing with remaining categories");
                continue;
            }
        };

        let mut accepted = 0usize;
        for candidate in candidates {
            if seen_ids.contains(&candidate.place_id) {
                continue;
            }
            let name_lower = candidate.name.to_lowercase();
            if !is_grocery_relevant(&name_lower, &candidate.types) {
                continue;
            }
            seen_ids.insert(candidate.place_id.clone());
            stores.push(to_canonical(candidate, origin));
            accepted += 1;
        }
        tracing::debug!(category = tag, accepted, "merged category query results");
    }

    tracing::info!(
        postal_code = %origin.postal_code,
        count = stores.len(),
        "aggregated grocery candidates"
    );
    stores
}

/// Convert an accepted raw candidate into the canonical representation,
/// computing its distance from the search origin.
fn to_canonical(candidate: RawCandidate, origin: &ResolvedLocation) -> CanonicalStore {
    let latitude = candidate.geometry.location.lat;
    let longitude = candidate.geometry.location.lng;
    let miles = distance_miles(
        origin.coordinate(),
        Coordinate {
            latitude,
            longitude,
        },
    );

    let category = categorize(&candidate.name, &candidate.types);
    let address = candidate.address();
    let hours = candidate
        .opening_hours
        .as_ref()
        .map_or_else(StoreHours::default, |h| transcribe_hours(&h.weekday_text));

    CanonicalStore {
        id: candidate.place_id,
        name: if candidate.name.is_empty() {
            "Unknown Store".to_string()
        } else {
            candidate.name
        },
        address,
        phone: candidate.formatted_phone_number,
        website: candidate.website,
        latitude,
        longitude,
        distance_miles: round_to_tenth(miles),
        price_score: category.price_score,
        health_score: category.health_score,
        rating: candidate.rating.unwrap_or(DEFAULT_RATING),
        categories: category.categories,
        hours,
    }
}

/// Transcribe per-weekday description strings ("Monday: 8:00 AM – 10:00 PM")
/// into the canonical hours shape. Days without a description keep the
/// "Hours not available" placeholder.
fn transcribe_hours(weekday_text: &[String]) -> StoreHours {
    let mut hours = StoreHours::default();
    for description in weekday_text {
        let Some((day, value)) = description.split_once(": ") else {
            continue;
        };
        let slot = match day {
            "Monday" => &mut hours.monday,
            "Tuesday" => &mut hours.tuesday,
            "Wednesday" => &mut hours.wednesday,
            "Thursday" => &mut hours.thursday,
            "Friday" => &mut hours.friday,
            "Saturday" => &mut hours.saturday,
            "Sunday" => &mut hours.sunday,
            _ => continue,
        };
        *slot = value.to_string();
    }
    hours
}
