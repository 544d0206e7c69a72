use serde::Serialize;

/// One reporting period of the balance sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceSheetRow {
    /// Period end as a Unix timestamp.
    pub period_end: i64,
    pub total_assets: Option<f64>,
    pub total_liabilities: Option<f64>,
    pub total_equity: Option<f64>,
    pub cash: Option<f64>,
    pub long_term_debt: Option<f64>,
}

/// One reporting period of the cash flow statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowRow {
    /// Period end as a Unix timestamp.
    pub period_end: i64,
    pub operating_cashflow: Option<f64>,
    pub capital_expenditures: Option<f64>,
    pub free_cash_flow: Option<f64>,
    pub net_income: Option<f64>,
}
