//! `search` and `availability` subcommands.

use anyhow::Context;
use storefind_core::CanonicalStore;
use storefind_engine::{availability, SearchEngine};
use storefind_maps::{ClientConfig, MapsClient};

/// Run a full search and print the three recommendations, each with its
/// presentation-time availability estimate.
pub async fn run_search(location: &str, item: &str, json: bool) -> anyhow::Result<()> {
    let config = storefind_core::load_app_config_from_env()?;
    let api_key = config
        .google_maps_api_key
        .clone()
        .context("GOOGLE_MAPS_API_KEY is required for the search command")?;

    let maps = MapsClient::new(ClientConfig {
        api_key,
        geocode_timeout_secs: config.geocode_timeout_secs,
        places_timeout_secs: config.places_timeout_secs,
    })?;
    let engine = SearchEngine::new(maps, config.search_radius_miles);

    let result = engine.search(location.trim(), item.trim()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let place = match (&result.user_location.city, &result.user_location.state) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        (Some(city), None) => city.clone(),
        _ => result.user_location.postal_code.clone(),
    };
    println!(
        "Recommendations for \"{}\" near {} ({})",
        result.searched_item, result.user_location.postal_code, place
    );
    println!();
    print_recommendation("Closest", &result.shortest, &result.searched_item);
    print_recommendation("Healthiest", &result.healthiest, &result.searched_item);
    print_recommendation(
        "Budget-friendly",
        &result.budget_friendly,
        &result.searched_item,
    );
    Ok(())
}

fn print_recommendation(label: &str, store: &CanonicalStore, item: &str) {
    println!("{label}: {} ({} mi)", store.name, store.distance_miles);
    if !store.address.is_empty() {
        println!("  {}", store.address);
    }
    println!(
        "  health {}/10 · budget reputation {}/10 · rating {:.1}",
        store.health_score, store.price_score, store.rating
    );
    let estimate = availability::estimate(&store.name, item);
    println!(
        "  likely carries \"{item}\": {:.0}% ({}) — {}",
        estimate.likelihood * 100.0,
        estimate.confidence,
        estimate.reasons.join(", ")
    );
    println!();
}

/// Print an availability estimate for one store/item pair.
pub fn run_availability(store: &str, item: &str, json: bool) -> anyhow::Result<()> {
    let estimate = availability::estimate(store.trim(), item.trim());

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!(
        "\"{}\" at {}: {:.0}% likely ({})",
        item,
        store,
        estimate.likelihood * 100.0,
        estimate.confidence
    );
    for reason in &estimate.reasons {
        println!("  - {reason}");
    }
    Ok(())
}
