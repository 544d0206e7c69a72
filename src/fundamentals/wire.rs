//! Serde mapping for the statement-history quoteSummary modules.

use serde::Deserialize;

use crate::core::wire::{RawDate, RawNum};

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) balance_sheet_history: Option<BalanceHistoryNode>,
    pub(crate) balance_sheet_history_quarterly: Option<BalanceHistoryNode>,
    pub(crate) cashflow_statement_history: Option<CashflowHistoryNode>,
    pub(crate) cashflow_statement_history_quarterly: Option<CashflowHistoryNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceHistoryNode {
    pub(crate) balance_sheet_statements: Option<Vec<BalanceRowNode>>,
}

/// Only the columns the dashboard shows; everything else in the
/// statement is ignored.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BalanceRowNode {
    pub(crate) end_date: Option<RawDate>,
    pub(crate) total_assets: Option<RawNum<f64>>,
    pub(crate) total_liab: Option<RawNum<f64>>,
    pub(crate) total_stockholder_equity: Option<RawNum<f64>>,
    pub(crate) cash: Option<RawNum<f64>>,
    pub(crate) long_term_debt: Option<RawNum<f64>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CashflowHistoryNode {
    pub(crate) cashflow_statements: Option<Vec<CashflowRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CashflowRowNode {
    pub(crate) end_date: Option<RawDate>,
    pub(crate) total_cash_from_operating_activities: Option<RawNum<f64>>,
    pub(crate) capital_expenditures: Option<RawNum<f64>>,
    pub(crate) free_cashflow: Option<RawNum<f64>>,
    pub(crate) net_income: Option<RawNum<f64>>,
}
