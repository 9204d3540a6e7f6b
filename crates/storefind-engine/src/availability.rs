//! Heuristic item-availability estimation.
//!
//! Independent of the search pipeline; invoked per store at presentation
//! time. Matches the store against the chain reference table and runs a
//! capped additive likelihood model over the profile's keywords and
//! specialty tags. Never fails: unrecognized stores get a generic
//! low-confidence estimate.

use storefind_core::chains::{self, Specialty};
use storefind_core::{AvailabilityEstimate, Confidence};

/// Likelihood ceiling: without real inventory data the estimator never
/// reports certainty.
const MAX_LIKELIHOOD: f64 = 0.95;

/// Boost when the searched item matches one of the chain's common items.
const COMMON_ITEM_BOOST: f64 = 0.2;

/// Boost when the item's wording matches one of the chain's specialties.
const SPECIALTY_BOOST: f64 = 0.15;

/// Estimate how likely `store_name` is to carry `searched_item`.
#[must_use]
pub fn estimate(store_name: &str, searched_item: &str) -> AvailabilityEstimate {
    let name_lower = store_name.to_lowercase();
    let Some(profile) = chains::match_availability(&name_lower)
        .and_then(|rule| rule.availability.as_ref().map(|avail| (rule, avail)))
    else {
        // Unknown store: assume a generic grocery assortment. The
        // confidence is fixed low here even though 0.6 would bucket as
        // medium below.
        return AvailabilityEstimate {
            likelihood: 0.6,
            reasons: vec!["General grocery store".to_string()],
            confidence: Confidence::Low,
        };
    };
    let (rule, avail) = profile;

    let item_lower = searched_item.to_lowercase();
    let mut reasons = Vec::new();
    let mut likelihood = avail.base_likelihood;

    // Bidirectional containment: "organic milk" should hit a "milk"
    // keyword and vice versa.
    let has_common_item = avail.common_items.iter().any(|keyword| {
        item_lower.contains(keyword) || keyword.contains(item_lower.as_str())
    });
    if has_common_item {
        likelihood += COMMON_ITEM_BOOST;
        reasons.push("Commonly stocked item".to_string());
    }

    // At most one specialty fires; first match in tag order wins.
    let specialty_reason = rule
        .specialties
        .iter()
        .find_map(|specialty| specialty_match(*specialty, &item_lower));
    if let Some(reason) = specialty_reason {
        likelihood += SPECIALTY_BOOST;
        reasons.push(reason.to_string());
    }

    for strength in avail.strengths.iter().take(2) {
        reasons.push((*strength).to_string());
    }

    let likelihood = likelihood.min(MAX_LIKELIHOOD);

    let confidence = if likelihood >= 0.8 {
        Confidence::High
    } else if likelihood < 0.6 {
        Confidence::Low
    } else {
        Confidence::Medium
    };

    AvailabilityEstimate {
        likelihood,
        reasons,
        confidence,
    }
}

/// Specialty predicate: does the item's wording correlate with this
/// specialty tag?
fn specialty_match(specialty: Specialty, item_lower: &str) -> Option<&'static str> {
    match specialty {
        Specialty::Organic if item_lower.contains("organic") => {
            Some("Specializes in organic products")
        }
        Specialty::Budget if item_lower.contains("basic") || item_lower.contains("cheap") => {
            Some("Budget-friendly store")
        }
        Specialty::Premium if item_lower.contains("premium") || item_lower.contains("gourmet") => {
            Some("Specializes in premium products")
        }
        Specialty::Bulk if item_lower.contains("bulk") => Some("Bulk quantities available"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_store_returns_the_generic_low_estimate() {
        let estimate = estimate("Unknown Local Mart", "milk");
        assert!((estimate.likelihood - 0.6).abs() < f64::EPSILON);
        assert_eq!(estimate.confidence, Confidence::Low);
        assert_eq!(estimate.reasons, vec!["General grocery store".to_string()]);
    }

    #[test]
    fn common_item_boosts_likelihood_and_adds_a_reason() {
        // ALDI base 0.7, "milk" is a common item: 0.7 + 0.2 = 0.9.
        let estimate = estimate("ALDI", "milk");
        assert!((estimate.likelihood - 0.9).abs() < 1e-9);
        assert_eq!(estimate.confidence, Confidence::High);
        assert_eq!(estimate.reasons[0], "Commonly stocked item");
    }

    #[test]
    fn likelihood_is_always_capped_at_095() {
        // Whole Foods base 0.9 + common item 0.2 + organic specialty 0.15
        // would exceed 1 without the cap.
        let estimate = estimate("Whole Foods Market", "organic milk");
        assert!((estimate.likelihood - 0.95).abs() < 1e-9);
        assert_eq!(estimate.confidence, Confidence::High);
    }

    #[test]
    fn estimates_stay_within_bounds_for_arbitrary_inputs() {
        for (store, item) in [
            ("Whole Foods", "organic bulk premium gourmet basics"),
            ("Costco", "bulk milk"),
            ("Walmart", "cheap basics in bulk"),
            ("Trader Joe's", ""),
            ("", ""),
        ] {
            let result = estimate(store, item);
            assert!(
                (0.0..=0.95).contains(&result.likelihood),
                "{store}/{item} produced {}",
                result.likelihood
            );
        }
    }

    #[test]
    fn specialty_reason_follows_the_common_item_reason() {
        let result = estimate("Costco", "bulk milk");
        // "bulk milk" hits the "bulk milk" common item and the Bulk
        // specialty; strengths follow.
        assert_eq!(result.reasons[0], "Commonly stocked item");
        assert_eq!(result.reasons[1], "Bulk quantities available");
        assert_eq!(result.reasons[2], "Bulk quantities");
        assert_eq!(result.reasons.len(), 4);
    }

    #[test]
    fn at_most_two_strengths_are_appended() {
        // Target lists five strengths; only the first two surface.
        let result = estimate("Target", "telescope");
        assert_eq!(
            result.reasons,
            vec!["Trendy products".to_string(), "Good prices".to_string()]
        );
    }

    #[test]
    fn only_the_first_matching_specialty_fires() {
        // Walmart carries Bulk then Budget; an item matching both only
        // gets one boost: 0.8 + 0.15 = 0.95 exactly (not 1.1 capped).
        let result = estimate("Walmart", "cheap bulk staples");
        assert!((result.likelihood - 0.95).abs() < 1e-9);
        let specialty_reasons: Vec<_> = result
            .reasons
            .iter()
            .filter(|r| r.contains("Bulk quantities available") || r.contains("Budget-friendly"))
            .collect();
        assert_eq!(specialty_reasons.len(), 1);
        assert_eq!(specialty_reasons[0], "Bulk quantities available");
    }

    #[test]
    fn uncommon_item_without_boosts_is_medium_confidence() {
        // Costco's base 0.7 gets no boost for an item it neither stocks
        // commonly nor specializes in.
        let result = estimate("Costco", "saffron");
        assert!((result.likelihood - 0.7).abs() < 1e-9);
        assert_eq!(result.confidence, Confidence::Medium);
    }

    #[test]
    fn empty_item_matches_every_keyword_bidirectionally() {
        // An empty search string is contained in every keyword; this is
        // the documented bidirectional-containment behavior, so the boost
        // applies.
        let result = estimate("ALDI", "");
        assert!((result.likelihood - 0.9).abs() < 1e-9);
    }
}
