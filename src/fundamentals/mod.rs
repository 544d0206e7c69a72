//! Financial statements from the quoteSummary history modules.

mod api;
mod model;
mod wire;

pub use model::{BalanceSheetRow, CashflowRow};

use crate::core::{MarketClient, MarketError};

/// Fetches balance sheet rows, most recent period first.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn balance_sheet(
    client: &MarketClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Vec<BalanceSheetRow>, MarketError> {
    api::balance_sheet(client, symbol, quarterly).await
}

/// Fetches cash flow statement rows, most recent period first.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be parsed.
pub async fn cashflow(
    client: &MarketClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Vec<CashflowRow>, MarketError> {
    api::cashflow(client, symbol, quarterly).await
}
