//! Ownership data from the quoteSummary holders modules.

mod api;
mod model;
mod wire;

pub use model::{InstitutionalHolder, MajorHolder};

use crate::core::{MarketClient, MarketError};

/// Fetches the list of top institutional holders.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn institutional_holders(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<InstitutionalHolder>, MarketError> {
    api::institutional_holders(client, symbol).await
}

/// Fetches the major holders breakdown (e.g., % insiders, % institutions).
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn major_holders(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<MajorHolder>, MarketError> {
    api::major_holders(client, symbol).await
}
