use serde::Serialize;

/// Valuation and profitability ratios for one symbol.
///
/// Every field is optional; Yahoo omits whichever ratios do not apply
/// to the security (ETFs have no EPS, many stocks pay no dividend).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct KeyStats {
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    pub price_to_book: Option<f64>,
    pub trailing_eps: Option<f64>,
    /// Dividend yield as a fraction (0.0061 means 0.61%).
    pub dividend_yield: Option<f64>,
    /// Return on equity as a fraction.
    pub return_on_equity: Option<f64>,
    /// Total debt over equity, in percent as Yahoo reports it.
    pub debt_to_equity: Option<f64>,
}
