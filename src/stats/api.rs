use super::model::KeyStats;
use super::wire::V10Result;
use crate::core::wire::from_raw;
use crate::core::{MarketClient, MarketError, quotesummary};

const MODULES: &str = "summaryDetail,defaultKeyStatistics,financialData";

pub(super) async fn key_stats(
    client: &MarketClient,
    symbol: &str,
) -> Result<KeyStats, MarketError> {
    let root: V10Result =
        quotesummary::fetch_module_result(client, symbol, MODULES, "stats").await?;

    let summary = root.summary_detail;
    let keystats = root.default_key_statistics;
    let financial = root.financial_data;

    let forward_pe = summary
        .as_ref()
        .and_then(|s| from_raw(s.forward_pe))
        .or_else(|| keystats.as_ref().and_then(|k| from_raw(k.forward_pe)));

    Ok(KeyStats {
        market_cap: summary.as_ref().and_then(|s| from_raw(s.market_cap)),
        trailing_pe: summary.as_ref().and_then(|s| from_raw(s.trailing_pe)),
        forward_pe,
        price_to_book: keystats.as_ref().and_then(|k| from_raw(k.price_to_book)),
        trailing_eps: keystats.as_ref().and_then(|k| from_raw(k.trailing_eps)),
        dividend_yield: summary.as_ref().and_then(|s| from_raw(s.dividend_yield)),
        return_on_equity: financial.as_ref().and_then(|f| from_raw(f.return_on_equity)),
        debt_to_equity: financial.as_ref().and_then(|f| from_raw(f.debt_to_equity)),
    })
}
