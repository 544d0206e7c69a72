//! Serde mapping for the statistics quoteSummary modules.

use serde::Deserialize;

use crate::core::wire::RawNum;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) summary_detail: Option<SummaryDetailNode>,
    pub(crate) default_key_statistics: Option<KeyStatisticsNode>,
    pub(crate) financial_data: Option<FinancialDataNode>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct SummaryDetailNode {
    #[serde(rename = "marketCap")]
    pub(crate) market_cap: Option<RawNum<f64>>,
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum<f64>>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum<f64>>,
    #[serde(rename = "dividendYield")]
    pub(crate) dividend_yield: Option<RawNum<f64>>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct KeyStatisticsNode {
    #[serde(rename = "priceToBook")]
    pub(crate) price_to_book: Option<RawNum<f64>>,
    #[serde(rename = "trailingEps")]
    pub(crate) trailing_eps: Option<RawNum<f64>>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum<f64>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FinancialDataNode {
    pub(crate) return_on_equity: Option<RawNum<f64>>,
    pub(crate) debt_to_equity: Option<RawNum<f64>>,
}
