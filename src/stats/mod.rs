//! Key valuation ratios from the quoteSummary statistics modules.

mod api;
mod model;
mod wire;

pub use model::KeyStats;

use crate::core::{MarketClient, MarketError};

/// Fetches the key ratios for a symbol. Missing ratios stay `None`.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn key_stats(client: &MarketClient, symbol: &str) -> Result<KeyStats, MarketError> {
    api::key_stats(client, symbol).await
}
