//! Store search engine: geocode resolution, candidate aggregation,
//! categorization, and multi-criteria recommendation selection, plus the
//! standalone item-availability estimator.

pub mod aggregate;
pub mod availability;
pub mod categorize;
pub mod distance;
mod error;
pub mod fallback;
pub mod filter;
pub mod resolver;
pub mod select;

use storefind_core::{ResolvedLocation, SearchResult};
use storefind_maps::MapsClient;

pub use error::EngineError;
pub use resolver::GeocodeResolver;
pub use select::Recommendations;

/// One search pipeline instance: owns its geocode cache and the shared
/// maps client. Multiple independent instances may coexist in a process.
pub struct SearchEngine {
    maps: MapsClient,
    resolver: GeocodeResolver,
    radius_miles: f64,
}

impl SearchEngine {
    #[must_use]
    pub fn new(maps: MapsClient, radius_miles: f64) -> Self {
        Self {
            resolver: GeocodeResolver::new(maps.clone()),
            maps,
            radius_miles,
        }
    }

    /// Run one full search: resolve the postal code, aggregate nearby
    /// grocery candidates, and pick the three recommendations.
    ///
    /// An empty aggregation result is not an error — the synthetic
    /// fallback set stands in so the caller always gets three
    /// recommendations.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GeocodeFailure`] when the postal code cannot
    /// be resolved by any source. This is the only caller-visible failure.
    pub async fn search(&self, postal_code: &str, item: &str) -> Result<SearchResult, EngineError> {
        let user_location = self.resolver.resolve(postal_code).await?;
        tracing::debug!(
            postal_code,
            latitude = user_location.latitude,
            longitude = user_location.longitude,
            "resolved search origin"
        );

        let mut stores = aggregate::aggregate(&self.maps, &user_location, self.radius_miles).await;
        if stores.is_empty() {
            tracing::info!(postal_code, "no live candidates; using fallback store set");
            stores = fallback::fallback_stores(&user_location);
        }

        let picks = select::select(&stores)?;

        Ok(SearchResult {
            shortest: picks.shortest,
            healthiest: picks.healthiest,
            budget_friendly: picks.budget_friendly,
            searched_item: item.to_owned(),
            user_location,
        })
    }

    /// Resolve a postal code without running a search.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::GeocodeFailure`] when no source succeeds.
    pub async fn resolve(&self, postal_code: &str) -> Result<ResolvedLocation, EngineError> {
        self.resolver.resolve(postal_code).await
    }
}
