//! Synthetic quality scoring for accepted candidates.
//!
//! Scores come from the chain reference table (first matching rule wins),
//! then a convenience-store rule, then a generic supermarket default.
//! These are reputation judgments about the chain, not measurements.

use storefind_core::chains;

/// Category bucket assigned to one store: reputation scores plus
/// descriptive labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCategory {
    pub price_score: u8,
    pub health_score: u8,
    pub categories: Vec<String>,
}

/// Categorize a store by name and provider type tags.
#[must_use]
pub fn categorize(name: &str, types: &[String]) -> StoreCategory {
    let name_lower = name.to_lowercase();

    if let Some(rule) = chains::match_rule(&name_lower) {
        return StoreCategory {
            price_score: rule.price_score,
            health_score: rule.health_score,
            categories: rule.categories.iter().map(ToString::to_string).collect(),
        };
    }

    let is_convenience = types.iter().any(|t| t == "convenience_store")
        || name_lower.contains("corner")
        || (name_lower.contains("market") && !name_lower.contains("super"));
    if is_convenience {
        return StoreCategory {
            price_score: 4,
            health_score: 5,
            categories: vec!["Convenience".to_string(), "Quick Shopping".to_string()],
        };
    }

    StoreCategory {
        price_score: 6,
        health_score: 6,
        categories: vec!["Supermarket".to_string(), "Grocery Store".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_tags() -> Vec<String> {
        vec![]
    }

    #[test]
    fn aldi_scores_as_budget_discount() {
        let category = categorize("ALDI", &no_tags());
        assert_eq!(category.health_score, 6);
        assert_eq!(category.price_score, 9);
        assert!(category.categories.iter().any(|c| c == "Discount"));
        assert!(category.categories.iter().any(|c| c == "Budget-Friendly"));
    }

    #[test]
    fn whole_foods_scores_as_organic() {
        let category = categorize("Whole Foods Market", &no_tags());
        assert_eq!(category.health_score, 9);
        assert_eq!(category.price_score, 4);
        assert!(category.categories.iter().any(|c| c == "Organic"));
    }

    #[test]
    fn organic_keyword_lands_in_the_health_bucket_without_a_chain() {
        let category = categorize("Sunrise Organic Pantry", &no_tags());
        assert_eq!(category.health_score, 9);
        assert_eq!(category.price_score, 4);
    }

    #[test]
    fn costco_scores_as_warehouse() {
        let category = categorize("Costco Wholesale", &no_tags());
        assert_eq!(category.health_score, 7);
        assert_eq!(category.price_score, 8);
        assert!(category.categories.iter().any(|c| c == "Warehouse"));
    }

    #[test]
    fn schnucks_scores_as_mainstream_chain() {
        let category = categorize("Schnucks", &no_tags());
        assert_eq!(category.health_score, 7);
        assert_eq!(category.price_score, 6);
    }

    #[test]
    fn dierbergs_scores_as_regional_premium() {
        let category = categorize("Dierbergs Markets", &no_tags());
        assert_eq!(category.health_score, 8);
        assert_eq!(category.price_score, 6);
    }

    #[test]
    fn convenience_store_tag_triggers_the_convenience_bucket() {
        let tags = vec!["convenience_store".to_string()];
        let category = categorize("QuickShop", &tags);
        assert_eq!(category.health_score, 5);
        assert_eq!(category.price_score, 4);
    }

    #[test]
    fn market_name_without_super_is_convenience() {
        let category = categorize("Elm Street Market", &no_tags());
        assert_eq!(category.health_score, 5);
        assert_eq!(category.price_score, 4);
    }

    #[test]
    fn supermarket_name_is_not_convenience() {
        let category = categorize("Elm Street Supermarket", &no_tags());
        assert_eq!(category.health_score, 6);
        assert_eq!(category.price_score, 6);
    }

    #[test]
    fn unknown_store_gets_the_default_bucket() {
        let category = categorize("Galaxy Foods", &no_tags());
        assert_eq!(category.health_score, 6);
        assert_eq!(category.price_score, 6);
        assert!(category.categories.iter().any(|c| c == "Supermarket"));
    }

    #[test]
    fn trader_joes_keeps_default_scores() {
        let category = categorize("Trader Joe's", &no_tags());
        assert_eq!(category.health_score, 6);
        assert_eq!(category.price_score, 6);
    }
}
