use serde::Serialize;

/// One labelled line of the major-holders breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorHolder {
    /// Breakdown label, e.g. "% of Shares Held by Institutions".
    pub category: String,
    /// Pre-formatted value (a percentage or a plain count).
    pub value: String,
}

/// One institution's reported position in the stock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstitutionalHolder {
    /// Institution name.
    pub holder: String,
    /// Shares held at the report date.
    pub shares: u64,
    /// Report date as a Unix timestamp.
    pub date_reported: i64,
    /// Fraction of shares outstanding held (0.05 means 5%).
    pub pct_held: f64,
    /// Market value of the position.
    pub value: u64,
}
