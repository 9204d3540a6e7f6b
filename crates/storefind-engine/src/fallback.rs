//! Synthetic fallback candidates.
//!
//! When aggregation yields zero real stores (capability outage, remote
//! area), the pipeline substitutes this fixed set positioned near the
//! resolved origin so that selection always has non-empty input. A higher
//! layer distinguishes "no real-time results were found".

use storefind_core::{CanonicalStore, Coordinate, ResolvedLocation, StoreHours};

use crate::distance::{distance_miles, round_to_tenth};

/// Three synthetic stores offset slightly from the origin, one leaning
/// toward each recommendation criterion.
#[must_use]
pub fn fallback_stores(origin: &ResolvedLocation) -> Vec<CanonicalStore> {
    let weekday_hours = |open: &str, close: &str, sunday: &str| StoreHours {
        monday: format!("{open} - {close}"),
        tuesday: format!("{open} - {close}"),
        wednesday: format!("{open} - {close}"),
        thursday: format!("{open} - {close}"),
        friday: format!("{open} - {close}"),
        saturday: format!("{open} - {close}"),
        sunday: sunday.to_string(),
    };

    let synthetic = |id: &str,
                     name: &str,
                     address: &str,
                     lat_offset: f64,
                     lng_offset: f64,
                     rating: f64,
                     price_score: u8,
                     health_score: u8,
                     categories: &[&str],
                     hours: StoreHours,
                     phone: &str,
                     website: &str| {
        let latitude = origin.latitude + lat_offset;
        let longitude = origin.longitude + lng_offset;
        let miles = distance_miles(
            origin.coordinate(),
            Coordinate {
                latitude,
                longitude,
            },
        );
        CanonicalStore {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            phone: Some(phone.to_string()),
            website: Some(website.to_string()),
            latitude,
            longitude,
            distance_miles: round_to_tenth(miles),
            price_score,
            health_score,
            rating,
            categories: categories.iter().map(ToString::to_string).collect(),
            hours,
        }
    };

    vec![
        synthetic(
            "fallback-1",
            "Fresh Market",
            "123 Main St",
            0.001,
            0.001,
            4.5,
            7,
            8,
            &["Grocery", "Organic", "Fresh Produce"],
            weekday_hours("7:00 AM", "10:00 PM", "8:00 AM - 9:00 PM"),
            "(555) 123-4567",
            "https://freshmarket.com",
        ),
        synthetic(
            "fallback-2",
            "Budget Grocery",
            "456 Oak Ave",
            -0.002,
            0.002,
            4.0,
            9,
            6,
            &["Grocery", "Discount", "Budget-Friendly"],
            weekday_hours("6:00 AM", "11:00 PM", "7:00 AM - 10:00 PM"),
            "(555) 987-6543",
            "https://budgetgrocery.com",
        ),
        synthetic(
            "fallback-3",
            "Premium Foods",
            "789 Pine Rd",
            0.003,
            -0.001,
            4.8,
            5,
            9,
            &["Grocery", "Premium", "Organic", "Natural Foods"],
            weekday_hours("8:00 AM", "9:00 PM", "9:00 AM - 8:00 PM"),
            "(555) 456-7890",
            "https://premiumfoods.com",
        ),
    ]
}
