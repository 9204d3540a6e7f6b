//! Grocery-relevance filtering of raw search candidates.
//!
//! The external capability's categorization is inconsistent across
//! real-world retailers, so candidates arrive from several category
//! queries and must be filtered by name and type tags. Exclusion is
//! checked before inclusion and short-circuits acceptance: a casino with
//! a stray `"food"` tag never gets in.

/// Name substrings that mark a place as not-a-grocery regardless of tags.
const EXCLUDED_NAME_KEYWORDS: &[&str] = &[
    "casino",
    "hotel",
    "restaurant",
    "bar",
    "gas station",
    "bookstore",
    "mall",
    "outlet",
    "fashion",
    "jewelry",
    "bank",
];

/// Type tags that mark a place as not-a-grocery.
const EXCLUDED_TYPE_TAGS: &[&str] = &[
    "casino",
    "lodging",
    "restaurant",
    "bar",
    "gas_station",
    "book_store",
    "shopping_mall",
    "jewelry_store",
    "bank",
];

/// Chain-name substrings that positively identify a grocery seller.
///
/// Curated recall list; order does not matter here (any hit accepts),
/// unlike the scoring rule table.
const CHAIN_NAME_SIGNALS: &[&str] = &[
    // Big-box chains with grocery sections
    "walmart",
    "target",
    "super target",
    "meijer",
    "fred meyer",
    "k-mart",
    "kmart",
    // Traditional grocery chains
    "whole foods",
    "trader joe",
    "aldi",
    "kroger",
    "safeway",
    "publix",
    "wegmans",
    "giant",
    "stop & shop",
    "shoprite",
    "king soopers",
    "city market",
    "smith's",
    "ralphs",
    "vons",
    "albertsons",
    "jewel",
    "acme",
    "shaw's",
    "star market",
    // Warehouse clubs
    "costco",
    "sam's club",
    "bj's",
    // Regional chains
    "heb",
    "h-e-b",
    "harris teeter",
    "food lion",
    "giant eagle",
    "winn-dixie",
    "piggly wiggly",
    "ingles",
    "bi-lo",
    "food 4 less",
    "winco",
    "festival foods",
    "hy-vee",
    "schnucks",
    "dierbergs",
    "straub",
    // Health and natural food stores
    "fresh thyme",
    "sprouts",
    "earth fare",
    "natural grocers",
    "vitamin cottage",
    "mother's market",
    "fresh market",
    // West-coast chains
    "save mart",
    "lucky",
    "foodmaxx",
    "nob hill",
    // Discount chains
    "save-a-lot",
    "price chopper",
    "market basket",
    "winco foods",
];

/// Big-box names that make a bare `department_store` tag grocery-relevant.
const DEPARTMENT_STORE_GROCERS: &[&str] = &["walmart", "target", "meijer", "fred meyer"];

/// Whether a raw candidate should be kept as a grocery-relevant
/// establishment. `name_lower` must already be lower-cased.
#[must_use]
pub fn is_grocery_relevant(name_lower: &str, types: &[String]) -> bool {
    if is_excluded(name_lower, types) {
        return false;
    }
    is_included(name_lower, types)
}

fn is_excluded(name_lower: &str, types: &[String]) -> bool {
    if EXCLUDED_NAME_KEYWORDS.iter().any(|kw| name_lower.contains(kw)) {
        return true;
    }
    // Pharmacies only count when they advertise groceries.
    if name_lower.contains("pharmacy") && !name_lower.contains("grocery") {
        return true;
    }
    types
        .iter()
        .any(|tag| EXCLUDED_TYPE_TAGS.iter().any(|excluded| tag == excluded))
}

fn is_included(name_lower: &str, types: &[String]) -> bool {
    let has_type = |tag: &str| types.iter().any(|t| t == tag);

    if has_type("grocery_or_supermarket") || has_type("supermarket") {
        return true;
    }

    // A bare "food" tag is too broad; require a market/grocery-flavored name.
    if has_type("food")
        && (name_lower.contains("market")
            || name_lower.contains("grocery")
            || name_lower.contains("supermarket")
            || (name_lower.contains("fresh")
                && (name_lower.contains("market") || name_lower.contains("thyme"))))
    {
        return true;
    }

    if name_lower.contains("grocery")
        || name_lower.contains("supermarket")
        || name_lower.contains("supercenter")
    {
        return true;
    }

    if CHAIN_NAME_SIGNALS.iter().any(|chain| name_lower.contains(chain)) {
        return true;
    }

    has_type("department_store")
        && DEPARTMENT_STORE_GROCERS
            .iter()
            .any(|chain| name_lower.contains(chain))
}
