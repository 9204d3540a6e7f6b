//! Seed data for the store catalog.

use sqlx::PgPool;

use crate::stores::{upsert_stores, NewStore};
use crate::DbError;

fn weekday_hours(open: &str, close: &str, sunday: &str) -> serde_json::Value {
    let weekday = format!("{open} - {close}");
    serde_json::json!({
        "monday": weekday,
        "tuesday": weekday,
        "wednesday": weekday,
        "thursday": weekday,
        "friday": weekday,
        "saturday": weekday,
        "sunday": sunday,
    })
}

/// The pre-seeded catalog: a representative set of St. Louis-area
/// stores spanning every category bucket. Score values mirror the chain
/// reference table; they are reputation judgments, not prices.
#[must_use]
pub fn seed_catalog() -> Vec<NewStore> {
    vec![
        NewStore {
            place_id: "seed-schnucks-downtown".to_string(),
            name: "Schnucks".to_string(),
            address: "315 N 9th St, St. Louis, MO 63101".to_string(),
            phone: Some("(314) 436-7694".to_string()),
            website: Some("https://www.schnucks.com".to_string()),
            latitude: 38.6315,
            longitude: -90.1910,
            price_score: 6,
            health_score: 7,
            rating: 4.1,
            categories: serde_json::json!(["Supermarket", "Full Service"]),
            hours: weekday_hours("6:00 AM", "10:00 PM", "6:00 AM - 10:00 PM"),
        },
        NewStore {
            place_id: "seed-aldi-gravois".to_string(),
            name: "ALDI".to_string(),
            address: "3616 Gravois Ave, St. Louis, MO 63116".to_string(),
            phone: None,
            website: Some("https://www.aldi.us".to_string()),
            latitude: 38.5934,
            longitude: -90.2423,
            price_score: 9,
            health_score: 6,
            rating: 4.5,
            categories: serde_json::json!(["Discount", "Budget-Friendly", "Bulk Shopping"]),
            hours: weekday_hours("9:00 AM", "8:00 PM", "9:00 AM - 8:00 PM"),
        },
        NewStore {
            place_id: "seed-whole-foods-cwe".to_string(),
            name: "Whole Foods Market".to_string(),
            address: "4577 W Pine Blvd, St. Louis, MO 63108".to_string(),
            phone: Some("(314) 286-6170".to_string()),
            website: Some("https://www.wholefoodsmarket.com".to_string()),
            latitude: 38.6420,
            longitude: -90.2625,
            price_score: 4,
            health_score: 9,
            rating: 4.3,
            categories: serde_json::json!(["Organic", "Natural Foods", "Fresh Produce"]),
            hours: weekday_hours("8:00 AM", "9:00 PM", "8:00 AM - 9:00 PM"),
        },
        NewStore {
            place_id: "seed-dierbergs-brentwood".to_string(),
            name: "Dierbergs Markets".to_string(),
            address: "8450 Eager Rd, Brentwood, MO 63144".to_string(),
            phone: Some("(314) 918-3700".to_string()),
            website: Some("https://www.dierbergs.com".to_string()),
            latitude: 38.6266,
            longitude: -90.3485,
            price_score: 6,
            health_score: 8,
            rating: 4.4,
            categories: serde_json::json!(["Regional Chain", "Fresh Produce", "Local Favorites"]),
            hours: weekday_hours("7:00 AM", "9:00 PM", "7:00 AM - 9:00 PM"),
        },
        NewStore {
            place_id: "seed-target-hampton".to_string(),
            name: "Target".to_string(),
            address: "4255 Hampton Ave, St. Louis, MO 63109".to_string(),
            phone: Some("(314) 802-0243".to_string()),
            website: Some("https://www.target.com".to_string()),
            latitude: 38.5899,
            longitude: -90.2910,
            price_score: 7,
            health_score: 7,
            rating: 4.2,
            categories: serde_json::json!(["Department Store", "One-Stop Shopping", "Groceries & More"]),
            hours: weekday_hours("8:00 AM", "10:00 PM", "8:00 AM - 10:00 PM"),
        },
        NewStore {
            place_id: "seed-costco-stl".to_string(),
            name: "Costco Wholesale".to_string(),
            address: "4200 Rusty Rd, St. Louis, MO 63128".to_string(),
            phone: Some("(314) 487-1540".to_string()),
            website: Some("https://www.costco.com".to_string()),
            latitude: 38.5065,
            longitude: -90.3240,
            price_score: 8,
            health_score: 7,
            rating: 4.6,
            categories: serde_json::json!(["Warehouse", "Bulk Shopping", "Membership"]),
            hours: weekday_hours("10:00 AM", "8:30 PM", "10:00 AM - 6:00 PM"),
        },
        NewStore {
            place_id: "seed-straubs-cwe".to_string(),
            name: "Straub's Market".to_string(),
            address: "302 N Kingshighway Blvd, St. Louis, MO 63108".to_string(),
            phone: Some("(314) 361-6646".to_string()),
            website: Some("https://www.straubs.com".to_string()),
            latitude: 38.6451,
            longitude: -90.2616,
            price_score: 6,
            health_score: 8,
            rating: 4.5,
            categories: serde_json::json!(["Regional Chain", "Fresh Produce", "Local Favorites"]),
            hours: weekday_hours("8:00 AM", "8:00 PM", "9:00 AM - 7:00 PM"),
        },
    ]
}

/// Upsert the seed catalog into the database.
///
/// Returns the number of stores processed (inserted or updated).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_stores(pool: &PgPool) -> Result<usize, DbError> {
    let catalog = seed_catalog();
    upsert_stores(pool, &catalog).await?;
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_place_ids_are_unique() {
        let catalog = seed_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|s| s.place_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn seed_catalog_scores_are_in_range() {
        for store in seed_catalog() {
            assert!((1..=10).contains(&store.price_score), "{}", store.name);
            assert!((1..=10).contains(&store.health_score), "{}", store.name);
            assert!((1.0..=5.0).contains(&store.rating), "{}", store.name);
        }
    }

    #[test]
    fn seed_catalog_hours_cover_all_seven_days() {
        for store in seed_catalog() {
            let hours = store.hours.as_object().expect("hours object");
            for day in [
                "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
            ] {
                assert!(hours.contains_key(day), "{} missing {day}", store.name);
            }
        }
    }
}
