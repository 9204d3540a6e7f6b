//! Multi-criteria recommendation selection.
//!
//! Three independent winners over one candidate list: closest,
//! healthiest-leaning, most budget-leaning. The weighted coefficients and
//! bonus caps are a deliberate product choice — distance is a minor
//! penalty relative to the primary criterion in both weighted rules — and
//! must not be changed without changing what the product recommends.
//!
//! All three selections are left folds: on an exact tie the
//! earliest-enumerated candidate wins, keeping output deterministic for
//! identical inputs.

use storefind_core::CanonicalStore;

use crate::error::EngineError;

/// The three winners for one search.
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub shortest: CanonicalStore,
    pub healthiest: CanonicalStore,
    pub budget_friendly: CanonicalStore,
}

/// Select the three recommendations from a non-empty candidate list.
///
/// # Errors
///
/// Returns [`EngineError::EmptyCandidateSet`] if `stores` is empty.
pub fn select(stores: &[CanonicalStore]) -> Result<Recommendations, EngineError> {
    let first = stores.first().ok_or(EngineError::EmptyCandidateSet)?;

    let shortest = stores.iter().skip(1).fold(first, |best, store| {
        if store.distance_miles < best.distance_miles {
            store
        } else {
            best
        }
    });

    let healthiest = fold_by_score(first, &stores[1..], health_score);
    let budget_friendly = fold_by_score(first, &stores[1..], budget_score);

    Ok(Recommendations {
        shortest: shortest.clone(),
        healthiest: healthiest.clone(),
        budget_friendly: budget_friendly.clone(),
    })
}

/// Left fold keeping the running best unless a later store scores
/// strictly higher.
fn fold_by_score<'a>(
    first: &'a CanonicalStore,
    rest: &'a [CanonicalStore],
    score: impl Fn(&CanonicalStore) -> f64,
) -> &'a CanonicalStore {
    let mut best = first;
    let mut best_score = score(best);
    for store in rest {
        let candidate_score = score(store);
        if candidate_score > best_score {
            best = store;
            best_score = candidate_score;
        }
    }
    best
}

/// Composite health score: health reputation dominates, rating and the
/// category bonus refine, distance is a small penalty.
fn health_score(store: &CanonicalStore) -> f64 {
    f64::from(store.health_score) * 0.6
        + store.rating * 0.25
        + health_bonus(store) * 0.1
        - store.distance_miles * 0.05
}

/// Composite budget score: affordability reputation dominates.
fn budget_score(store: &CanonicalStore) -> f64 {
    f64::from(store.price_score) * 0.7 + store.rating * 0.15 - store.distance_miles * 0.1
        + price_bonus(store) * 0.05
}

/// Bonus for health-leaning category labels, capped at 3.
fn health_bonus(store: &CanonicalStore) -> f64 {
    let has = |keyword: &str| {
        store
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(keyword))
    };
    let mut bonus: f64 = 0.0;
    if has("organic") {
        bonus += 2.0;
    }
    if has("natural") {
        bonus += 1.5;
    }
    if has("fresh") {
        bonus += 1.0;
    }
    if has("premium") {
        bonus += 0.5;
    }
    bonus.min(3.0)
}

/// Bonus for budget-leaning category labels, capped at 3.
fn price_bonus(store: &CanonicalStore) -> f64 {
    let has = |keyword: &str| {
        store
            .categories
            .iter()
            .any(|category| category.to_lowercase().contains(keyword))
    };
    let mut bonus: f64 = 0.0;
    if has("discount") {
        bonus += 2.0;
    }
    if has("budget") {
        bonus += 1.5;
    }
    if has("bulk") {
        bonus += 1.0;
    }
    if has("warehouse") {
        bonus += 1.0;
    }
    bonus.min(3.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefind_core::StoreHours;

    fn store(id: &str, distance: f64, health: u8, price: u8, rating: f64) -> CanonicalStore {
        CanonicalStore {
            id: id.to_string(),
            name: format!("Store {id}"),
            address: String::new(),
            phone: None,
            website: None,
            latitude: 38.6,
            longitude: -90.2,
            distance_miles: distance,
            price_score: price,
            health_score: health,
            rating,
            categories: vec!["Supermarket".to_string()],
            hours: StoreHours::default(),
        }
    }

    fn with_categories(mut store: CanonicalStore, categories: &[&str]) -> CanonicalStore {
        store.categories = categories.iter().map(ToString::to_string).collect();
        store
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = select(&[]);
        assert!(matches!(result, Err(EngineError::EmptyCandidateSet)));
    }

    #[test]
    fn single_store_wins_every_slot() {
        let stores = vec![store("only", 2.0, 7, 6, 4.0)];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.shortest.id, "only");
        assert_eq!(picks.healthiest.id, "only");
        assert_eq!(picks.budget_friendly.id, "only");
    }

    #[test]
    fn shortest_is_minimal_over_the_list() {
        let stores = vec![
            store("a", 3.2, 7, 6, 4.0),
            store("b", 0.9, 7, 6, 4.0),
            store("c", 5.1, 7, 6, 4.0),
        ];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.shortest.id, "b");
        for s in &stores {
            assert!(picks.shortest.distance_miles <= s.distance_miles);
        }
    }

    #[test]
    fn shortest_tie_break_keeps_first_occurrence() {
        let stores = vec![store("first", 1.0, 7, 6, 4.0), store("second", 1.0, 7, 6, 4.0)];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.shortest.id, "first");
    }

    #[test]
    fn weighted_tie_break_keeps_first_occurrence() {
        // Identical stores under both weighted formulas.
        let stores = vec![store("first", 2.0, 8, 8, 4.5), store("second", 2.0, 8, 8, 4.5)];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.healthiest.id, "first");
        assert_eq!(picks.budget_friendly.id, "first");
    }

    #[test]
    fn healthiest_prefers_high_health_score_over_proximity() {
        let stores = vec![
            store("close_mediocre", 0.5, 6, 6, 4.0),
            store("far_healthy", 4.0, 9, 4, 4.5),
        ];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.healthiest.id, "far_healthy");
    }

    #[test]
    fn budget_prefers_high_price_score() {
        let stores = vec![
            store("premium", 1.0, 9, 4, 4.8),
            store("discounter", 2.0, 6, 9, 4.0),
        ];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.budget_friendly.id, "discounter");
    }

    #[test]
    fn organic_categories_tip_a_close_health_race() {
        // Same scores; only the category bonus differs.
        let plain = store("plain", 1.0, 8, 5, 4.0);
        let organic = with_categories(
            store("organic", 1.0, 8, 5, 4.0),
            &["Organic", "Natural Foods", "Fresh Produce"],
        );
        let stores = vec![plain, organic];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.healthiest.id, "organic");
    }

    #[test]
    fn health_bonus_caps_at_three() {
        let loaded = with_categories(
            store("x", 0.0, 5, 5, 3.0),
            &["Organic", "Natural Foods", "Fresh Produce", "Premium"],
        );
        // 2 + 1.5 + 1 + 0.5 = 5, capped to 3.
        assert!((health_bonus(&loaded) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_bonus_caps_at_three() {
        let loaded = with_categories(
            store("x", 0.0, 5, 5, 3.0),
            &["Discount", "Budget-Friendly", "Bulk Shopping", "Warehouse"],
        );
        // 2 + 1.5 + 1 + 1 = 5.5, capped to 3.
        assert!((price_bonus(&loaded) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn warehouse_categories_tip_a_close_budget_race() {
        let plain = store("plain", 1.0, 7, 8, 4.0);
        let warehouse = with_categories(
            store("warehouse", 1.0, 7, 8, 4.0),
            &["Warehouse", "Bulk Shopping"],
        );
        let stores = vec![plain, warehouse];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.budget_friendly.id, "warehouse");
    }

    #[test]
    fn one_store_may_win_multiple_slots() {
        let all_rounder = with_categories(
            store("all", 0.3, 9, 9, 4.9),
            &["Organic", "Discount", "Fresh Produce"],
        );
        let stores = vec![store("other", 2.0, 6, 6, 3.5), all_rounder];
        let picks = select(&stores).expect("non-empty");
        assert_eq!(picks.shortest.id, "all");
        assert_eq!(picks.healthiest.id, "all");
        assert_eq!(picks.budget_friendly.id, "all");
    }
}
