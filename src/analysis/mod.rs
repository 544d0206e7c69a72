//! Analyst coverage from the quoteSummary analysis modules.

mod api;
mod model;
mod wire;

pub use model::{RecommendationRow, RecommendationSummary, UpgradeDowngradeRow};

use crate::core::{MarketClient, MarketError};

/// Fetches the recommendation trend table (one row per trailing period).
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn recommendations(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<RecommendationRow>, MarketError> {
    api::recommendations(client, symbol).await
}

/// Fetches the current-month consensus plus the mean recommendation score.
///
/// Returns `Ok(None)` when Yahoo reports no analyst coverage at all.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn recommendations_summary(
    client: &MarketClient,
    symbol: &str,
) -> Result<Option<RecommendationSummary>, MarketError> {
    api::recommendations_summary(client, symbol).await
}

/// Fetches the history of analyst rating changes, oldest first.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn upgrades_downgrades(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<UpgradeDowngradeRow>, MarketError> {
    api::upgrades_downgrades(client, symbol).await
}
