use super::model::{BalanceSheetRow, CashflowRow};
use super::wire::{BalanceHistoryNode, CashflowHistoryNode, V10Result};
use crate::core::wire::{from_raw, from_raw_date};
use crate::core::{MarketClient, MarketError, quotesummary};

async fn fetch_statements(
    client: &MarketClient,
    symbol: &str,
    modules: &str,
) -> Result<V10Result, MarketError> {
    quotesummary::fetch_module_result(client, symbol, modules, "fundamentals").await
}

fn map_balance(node: BalanceHistoryNode) -> Vec<BalanceSheetRow> {
    node.balance_sheet_statements
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let period_end = from_raw_date(row.end_date)?;
            Some(BalanceSheetRow {
                period_end,
                total_assets: from_raw(row.total_assets),
                total_liabilities: from_raw(row.total_liab),
                total_equity: from_raw(row.total_stockholder_equity),
                cash: from_raw(row.cash),
                long_term_debt: from_raw(row.long_term_debt),
            })
        })
        .collect()
}

fn map_cashflow(node: CashflowHistoryNode) -> Vec<CashflowRow> {
    node.cashflow_statements
        .unwrap_or_default()
        .into_iter()
        .filter_map(|row| {
            let period_end = from_raw_date(row.end_date)?;
            let operating_cashflow = from_raw(row.total_cash_from_operating_activities);
            let capital_expenditures = from_raw(row.capital_expenditures);
            // Capex magnitude is subtracted whichever sign it arrives with;
            // Yahoo usually reports it as a negative outflow.
            let free_cash_flow = from_raw(row.free_cashflow).or_else(|| {
                match (operating_cashflow, capital_expenditures) {
                    (Some(ocf), Some(capex)) => Some(ocf - capex.abs()),
                    _ => None,
                }
            });
            Some(CashflowRow {
                period_end,
                operating_cashflow,
                capital_expenditures,
                free_cash_flow,
                net_income: from_raw(row.net_income),
            })
        })
        .collect()
}

pub(super) async fn balance_sheet(
    client: &MarketClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Vec<BalanceSheetRow>, MarketError> {
    let modules = if quarterly {
        "balanceSheetHistoryQuarterly"
    } else {
        "balanceSheetHistory"
    };
    let root = fetch_statements(client, symbol, modules).await?;
    let node = if quarterly {
        root.balance_sheet_history_quarterly
    } else {
        root.balance_sheet_history
    };
    Ok(node.map(map_balance).unwrap_or_default())
}

pub(super) async fn cashflow(
    client: &MarketClient,
    symbol: &str,
    quarterly: bool,
) -> Result<Vec<CashflowRow>, MarketError> {
    let modules = if quarterly {
        "cashflowStatementHistoryQuarterly"
    } else {
        "cashflowStatementHistory"
    };
    let root = fetch_statements(client, symbol, modules).await?;
    let node = if quarterly {
        root.cashflow_statement_history_quarterly
    } else {
        root.cashflow_statement_history
    };
    Ok(node.map(map_cashflow).unwrap_or_default())
}
