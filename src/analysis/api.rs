use super::model::{RecommendationRow, RecommendationSummary, UpgradeDowngradeRow};
use super::wire::V10Result;
use crate::core::wire::from_raw;
use crate::core::{MarketClient, MarketError, quotesummary};

const MODULES: &str = "recommendationTrend,financialData,upgradeDowngradeHistory";

async fn fetch_analysis_modules(
    client: &MarketClient,
    symbol: &str,
) -> Result<V10Result, MarketError> {
    quotesummary::fetch_module_result(client, symbol, MODULES, "analysis").await
}

fn map_trend(root: &V10Result) -> Vec<RecommendationRow> {
    root.recommendation_trend
        .as_ref()
        .and_then(|n| n.trend.as_ref())
        .map(|rows| {
            rows.iter()
                .map(|r| RecommendationRow {
                    period: r.period.clone().unwrap_or_default(),
                    strong_buy: r.strong_buy.unwrap_or(0),
                    buy: r.buy.unwrap_or(0),
                    hold: r.hold.unwrap_or(0),
                    sell: r.sell.unwrap_or(0),
                    strong_sell: r.strong_sell.unwrap_or(0),
                })
                .collect()
        })
        .unwrap_or_default()
}

pub(super) async fn recommendations(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<RecommendationRow>, MarketError> {
    let root = fetch_analysis_modules(client, symbol).await?;
    Ok(map_trend(&root))
}

pub(super) async fn recommendations_summary(
    client: &MarketClient,
    symbol: &str,
) -> Result<Option<RecommendationSummary>, MarketError> {
    let root = fetch_analysis_modules(client, symbol).await?;

    let rows = map_trend(&root);
    // "0m" is the current month; fall back to the first row Yahoo returns.
    let latest = rows
        .iter()
        .find(|r| r.period == "0m")
        .or_else(|| rows.first());

    let Some(latest) = latest else {
        return Ok(None);
    };

    let financial = root.financial_data.as_ref();
    Ok(Some(RecommendationSummary {
        latest_period: latest.period.clone(),
        strong_buy: latest.strong_buy,
        buy: latest.buy,
        hold: latest.hold,
        sell: latest.sell,
        strong_sell: latest.strong_sell,
        mean: financial.and_then(|f| from_raw(f.recommendation_mean.clone())),
        mean_key: financial.and_then(|f| f.recommendation_key.clone()),
    }))
}

pub(super) async fn upgrades_downgrades(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<UpgradeDowngradeRow>, MarketError> {
    let root = fetch_analysis_modules(client, symbol).await?;

    let mut rows: Vec<UpgradeDowngradeRow> = root
        .upgrade_downgrade_history
        .and_then(|n| n.history)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|r| {
            let ts = r.epoch_grade_date?;
            Some(UpgradeDowngradeRow {
                ts,
                firm: r.firm.unwrap_or_default(),
                from_grade: r.from_grade.unwrap_or_default(),
                to_grade: r.to_grade.unwrap_or_default(),
                action: r.action.unwrap_or_default(),
            })
        })
        .collect();

    rows.sort_by_key(|r| r.ts);
    Ok(rows)
}
