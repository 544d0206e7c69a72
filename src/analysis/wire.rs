//! Serde mapping for the analyst-coverage quoteSummary modules.

use serde::Deserialize;

use crate::core::wire::RawNum;

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) recommendation_trend: Option<TrendNode>,
    pub(crate) financial_data: Option<FinancialDataNode>,
    pub(crate) upgrade_downgrade_history: Option<UpgradeHistoryNode>,
}

#[derive(Deserialize)]
pub(crate) struct TrendNode {
    pub(crate) trend: Option<Vec<TrendRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct TrendRowNode {
    pub(crate) period: Option<String>,
    pub(crate) strong_buy: Option<u32>,
    pub(crate) buy: Option<u32>,
    pub(crate) hold: Option<u32>,
    pub(crate) sell: Option<u32>,
    pub(crate) strong_sell: Option<u32>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FinancialDataNode {
    pub(crate) recommendation_mean: Option<RawNum<f64>>,
    pub(crate) recommendation_key: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct UpgradeHistoryNode {
    pub(crate) history: Option<Vec<UpgradeRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct UpgradeRowNode {
    pub(crate) epoch_grade_date: Option<i64>,
    pub(crate) firm: Option<String>,
    pub(crate) from_grade: Option<String>,
    pub(crate) to_grade: Option<String>,
    pub(crate) action: Option<String>,
}
