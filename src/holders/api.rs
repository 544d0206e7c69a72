use super::model::{InstitutionalHolder, MajorHolder};
use super::wire::V10Result;
use crate::core::wire::from_raw;
use crate::core::{MarketClient, MarketError, quotesummary};

const MODULES: &str = "institutionOwnership,majorHoldersBreakdown";

async fn fetch_holders_modules(
    client: &MarketClient,
    symbol: &str,
) -> Result<V10Result, MarketError> {
    quotesummary::fetch_module_result(client, symbol, MODULES, "holders").await
}

pub(super) async fn institutional_holders(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<InstitutionalHolder>, MarketError> {
    let root = fetch_holders_modules(client, symbol).await?;

    Ok(root
        .institution_ownership
        .and_then(|n| n.ownership_list)
        .unwrap_or_default()
        .into_iter()
        .map(|h| InstitutionalHolder {
            holder: h.organization.unwrap_or_default(),
            shares: from_raw(h.position).unwrap_or(0),
            date_reported: h.report_date.and_then(|d| d.raw).unwrap_or(0),
            pct_held: from_raw(h.pct_held).unwrap_or(0.0),
            value: from_raw(h.value).unwrap_or(0),
        })
        .collect())
}

pub(super) async fn major_holders(
    client: &MarketClient,
    symbol: &str,
) -> Result<Vec<MajorHolder>, MarketError> {
    let root = fetch_holders_modules(client, symbol).await?;
    let breakdown = root
        .major_holders_breakdown
        .ok_or_else(|| MarketError::Data("majorHoldersBreakdown missing".into()))?;

    let percent_fmt = |v: f64| format!("{:.2}%", v * 100.0);

    let mut result = Vec::new();
    if let Some(v) = from_raw(breakdown.insiders_percent_held) {
        result.push(MajorHolder {
            category: "% of Shares Held by All Insider".into(),
            value: percent_fmt(v),
        });
    }
    if let Some(v) = from_raw(breakdown.institutions_percent_held) {
        result.push(MajorHolder {
            category: "% of Shares Held by Institutions".into(),
            value: percent_fmt(v),
        });
    }
    if let Some(v) = from_raw(breakdown.institutions_float_percent_held) {
        result.push(MajorHolder {
            category: "% of Float Held by Institutions".into(),
            value: percent_fmt(v),
        });
    }
    if let Some(v) = from_raw(breakdown.institutions_count) {
        result.push(MajorHolder {
            category: "Number of Institutions Holding Shares".into(),
            value: v.to_string(),
        });
    }

    Ok(result)
}
