//! Unified chain reference table.
//!
//! One ordered rule list encodes everything the engine knows about retail
//! chains: reputation scores, category labels, specialty tags, and the
//! per-chain item-availability data. The categorizer and the availability
//! estimator both read this table, so the two judgments cannot drift
//! apart. Rules are evaluated top to bottom and the first match wins —
//! order matters because keys overlap (a name containing "fresh market"
//! must land in the organic bucket before any premium rule sees it).

/// Specialty tags that the availability estimator's item predicates key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialty {
    Organic,
    Budget,
    Premium,
    Bulk,
}

/// Per-chain item-availability data, present only for chains with a
/// curated profile.
#[derive(Debug)]
pub struct AvailabilityProfile {
    /// Items this chain reliably stocks; matched bidirectionally against
    /// the searched item.
    pub common_items: &'static [&'static str],
    /// Starting likelihood that any given item is carried, 0–1.
    pub base_likelihood: f64,
    /// Human-readable strengths; the first two surface as reasons.
    pub strengths: &'static [&'static str],
}

/// One row of the chain reference table.
#[derive(Debug)]
pub struct ChainRule {
    /// Lower-case name substrings that identify the chain(s).
    pub keys: &'static [&'static str],
    /// Health reputation, 1–10.
    pub health_score: u8,
    /// Affordability reputation, 1–10 (higher = more budget-friendly).
    pub price_score: u8,
    /// Descriptive labels appended to matching stores.
    pub categories: &'static [&'static str],
    pub specialties: &'static [Specialty],
    pub availability: Option<AvailabilityProfile>,
}

impl ChainRule {
    /// Whether any of this rule's keys occurs in the (lower-cased) name.
    #[must_use]
    pub fn matches(&self, name_lower: &str) -> bool {
        self.keys.iter().any(|key| name_lower.contains(key))
    }
}

/// First rule matching the lower-cased store name, if any.
#[must_use]
pub fn match_rule(name_lower: &str) -> Option<&'static ChainRule> {
    CHAIN_RULES.iter().find(|rule| rule.matches(name_lower))
}

/// First rule that both matches the lower-cased store name and carries
/// availability data.
///
/// Scans past availability-less rules so that, say, "Natural Target"
/// still reaches the Target profile even though the organic bucket
/// categorizes it.
#[must_use]
pub fn match_availability(name_lower: &str) -> Option<&'static ChainRule> {
    CHAIN_RULES
        .iter()
        .find(|rule| rule.availability.is_some() && rule.matches(name_lower))
}

/// The reference table, in bucket-priority order: organic/health-focused,
/// premium regional, budget/discount, department stores with groceries,
/// warehouse clubs, mainstream chains, regional premium chains.
pub const CHAIN_RULES: &[ChainRule] = &[
    ChainRule {
        keys: &["whole foods"],
        health_score: 9,
        price_score: 4,
        categories: &["Organic", "Natural Foods", "Fresh Produce"],
        specialties: &[Specialty::Organic, Specialty::Premium],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "organic milk",
                "almond milk",
                "oat milk",
                "organic eggs",
                "grass-fed beef",
                "organic chicken",
                "quinoa",
                "kale",
                "avocado",
                "organic bread",
                "kombucha",
                "coconut oil",
            ],
            base_likelihood: 0.9,
            strengths: &[
                "Organic products",
                "High quality",
                "Specialty diets",
                "Fresh produce",
            ],
        }),
    },
    ChainRule {
        keys: &["fresh thyme"],
        health_score: 9,
        price_score: 4,
        categories: &["Organic", "Natural Foods", "Fresh Produce"],
        specialties: &[Specialty::Organic],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "organic produce",
                "natural products",
                "supplements",
                "fresh meat",
                "organic dairy",
                "gluten-free",
                "vegan options",
            ],
            base_likelihood: 0.9,
            strengths: &[
                "Organic focus",
                "Natural products",
                "Health-conscious options",
            ],
        }),
    },
    ChainRule {
        keys: &["sprouts"],
        health_score: 9,
        price_score: 4,
        categories: &["Organic", "Natural Foods", "Fresh Produce"],
        specialties: &[Specialty::Organic],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "organic produce",
                "natural supplements",
                "bulk foods",
                "gluten-free",
                "plant-based options",
            ],
            base_likelihood: 0.9,
            strengths: &["Natural foods", "Organic produce", "Health supplements"],
        }),
    },
    // Remaining health-focused chains and the generic organic/natural
    // name keywords share one bucket-level rule.
    ChainRule {
        keys: &[
            "organic",
            "natural",
            "fresh market",
            "earth fare",
            "natural grocers",
            "vitamin cottage",
            "mother's market",
        ],
        health_score: 9,
        price_score: 4,
        categories: &["Organic", "Natural Foods", "Fresh Produce"],
        specialties: &[Specialty::Organic],
        availability: None,
    },
    ChainRule {
        keys: &["harris teeter", "publix", "wegmans"],
        health_score: 8,
        price_score: 5,
        categories: &["Premium", "Fresh Produce"],
        specialties: &[Specialty::Premium],
        availability: None,
    },
    ChainRule {
        keys: &["aldi"],
        health_score: 6,
        price_score: 9,
        categories: &["Discount", "Budget-Friendly", "Bulk Shopping"],
        specialties: &[Specialty::Budget],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "milk", "bread", "eggs", "cheese", "butter", "yogurt", "chicken",
                "ground beef", "pasta", "rice", "cereal", "bananas", "apples",
                "potatoes", "onions",
            ],
            base_likelihood: 0.7,
            strengths: &["Low prices", "Basic groceries", "European brands"],
        }),
    },
    ChainRule {
        keys: &["walmart"],
        health_score: 6,
        price_score: 9,
        categories: &["Discount", "Budget-Friendly", "Bulk Shopping"],
        specialties: &[Specialty::Bulk, Specialty::Budget],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "milk",
                "bread",
                "eggs",
                "diapers",
                "cleaning supplies",
                "pharmacy",
                "electronics",
                "clothing",
            ],
            base_likelihood: 0.8,
            strengths: &["Wide selection", "Low prices", "One-stop shopping"],
        }),
    },
    ChainRule {
        keys: &[
            "food 4 less",
            "winco",
            "price chopper",
            "save-a-lot",
            "market basket",
        ],
        health_score: 6,
        price_score: 9,
        categories: &["Discount", "Budget-Friendly", "Bulk Shopping"],
        specialties: &[Specialty::Budget],
        availability: None,
    },
    ChainRule {
        keys: &["target"],
        health_score: 7,
        price_score: 7,
        categories: &["Department Store", "One-Stop Shopping", "Groceries & More"],
        specialties: &[],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "milk",
                "snacks",
                "frozen foods",
                "home goods",
                "beauty products",
                "clothing",
                "basic groceries",
                "household items",
                "personal care",
            ],
            base_likelihood: 0.7,
            strengths: &[
                "Trendy products",
                "Good prices",
                "Home & lifestyle",
                "Convenient shopping",
                "Wide selection",
            ],
        }),
    },
    ChainRule {
        keys: &["meijer", "fred meyer", "kmart", "k-mart"],
        health_score: 7,
        price_score: 7,
        categories: &["Department Store", "One-Stop Shopping", "Groceries & More"],
        specialties: &[],
        availability: None,
    },
    ChainRule {
        keys: &["costco"],
        health_score: 7,
        price_score: 8,
        categories: &["Warehouse", "Bulk Shopping", "Membership"],
        specialties: &[Specialty::Bulk],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "bulk milk",
                "bulk bread",
                "large eggs",
                "meat in bulk",
                "household supplies",
            ],
            base_likelihood: 0.7,
            strengths: &["Bulk quantities", "Great value", "Business supplies"],
        }),
    },
    ChainRule {
        keys: &["sam's club", "bj's"],
        health_score: 7,
        price_score: 8,
        categories: &["Warehouse", "Bulk Shopping", "Membership"],
        specialties: &[Specialty::Bulk],
        availability: None,
    },
    ChainRule {
        keys: &[
            "kroger",
            "safeway",
            "giant",
            "stop & shop",
            "king soopers",
            "ralph",
            "albertsons",
            "vons",
            "jewel",
            "acme",
            "shaw's",
            "star market",
            "smith's",
            "city market",
            "food lion",
            "giant eagle",
            "winn-dixie",
            "hy-vee",
            "schnucks",
            "festival foods",
        ],
        health_score: 7,
        price_score: 6,
        categories: &["Supermarket", "Full Service"],
        specialties: &[],
        availability: None,
    },
    ChainRule {
        keys: &["dierbergs"],
        health_score: 8,
        price_score: 6,
        categories: &["Regional Chain", "Fresh Produce", "Local Favorites"],
        specialties: &[],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "fresh produce",
                "meat",
                "seafood",
                "bakery",
                "deli",
                "local products",
            ],
            base_likelihood: 0.8,
            strengths: &["Fresh products", "Local sourcing", "Full-service deli"],
        }),
    },
    ChainRule {
        keys: &["straub"],
        health_score: 8,
        price_score: 6,
        categories: &["Regional Chain", "Fresh Produce", "Local Favorites"],
        specialties: &[Specialty::Premium],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "premium meats",
                "fine cheese",
                "wine",
                "gourmet items",
                "fresh seafood",
                "artisan bread",
            ],
            base_likelihood: 0.8,
            strengths: &["Premium quality", "Gourmet selection", "Local specialties"],
        }),
    },
    ChainRule {
        keys: &["h-e-b", "heb"],
        health_score: 8,
        price_score: 6,
        categories: &["Regional Chain", "Fresh Produce", "Local Favorites"],
        specialties: &[],
        availability: None,
    },
    // Trader Joe's has a curated availability profile but no dedicated
    // score bucket; it carries the default supermarket scores.
    ChainRule {
        keys: &["trader joe"],
        health_score: 6,
        price_score: 6,
        categories: &["Supermarket", "Grocery Store"],
        specialties: &[],
        availability: Some(AvailabilityProfile {
            common_items: &[
                "specialty cheese",
                "wine",
                "frozen meals",
                "nuts",
                "chocolate",
                "seasonal items",
                "international foods",
                "organic options",
            ],
            base_likelihood: 0.8,
            strengths: &["Unique products", "Good prices", "Private label quality"],
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aldi_matches_the_discount_rule() {
        let rule = match_rule("aldi").expect("ALDI should match");
        assert_eq!(rule.health_score, 6);
        assert_eq!(rule.price_score, 9);
        assert!(rule.categories.contains(&"Discount"));
    }

    #[test]
    fn fresh_market_lands_in_the_organic_bucket() {
        // "fresh market" overlaps with premium-sounding names; the organic
        // rule must win because it comes first.
        let rule = match_rule("the fresh market").expect("should match");
        assert_eq!(rule.health_score, 9);
        assert_eq!(rule.price_score, 4);
    }

    #[test]
    fn unknown_name_matches_nothing() {
        assert!(match_rule("corner pantry #42").is_none());
    }

    #[test]
    fn availability_scan_skips_profile_less_rules() {
        // Matches the organic bucket for categorization, but the first
        // rule with availability data is Target.
        let rule = match_availability("natural target").expect("should match");
        assert!(rule.keys.contains(&"target"));
    }

    #[test]
    fn kroger_categorizes_but_has_no_availability_profile() {
        assert!(match_rule("kroger on main").is_some());
        assert!(match_availability("kroger on main").is_none());
    }

    #[test]
    fn every_base_likelihood_is_a_probability() {
        for rule in CHAIN_RULES {
            if let Some(avail) = &rule.availability {
                assert!(
                    (0.0..=1.0).contains(&avail.base_likelihood),
                    "rule {:?} has out-of-range base likelihood",
                    rule.keys
                );
            }
        }
    }

    #[test]
    fn every_rule_scores_within_one_to_ten() {
        for rule in CHAIN_RULES {
            assert!((1..=10).contains(&rule.health_score));
            assert!((1..=10).contains(&rule.price_score));
            assert!(!rule.categories.is_empty());
        }
    }
}
