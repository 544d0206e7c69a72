use serde::Serialize;

/// Analyst recommendation counts for one trailing period (e.g. "0m", "-1m").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationRow {
    /// Period label relative to now, as reported ("0m" is the current month).
    pub period: String,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
}

impl RecommendationRow {
    /// Total number of analysts across all buckets.
    pub fn total(&self) -> u32 {
        self.strong_buy + self.buy + self.hold + self.sell + self.strong_sell
    }
}

/// Aggregate view of the current analyst consensus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    /// Period label of the row the counts were taken from.
    pub latest_period: String,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
    /// Mean recommendation score (1 = strong buy, 5 = sell).
    pub mean: Option<f64>,
    /// Yahoo's label for the mean score, e.g. "buy".
    pub mean_key: Option<String>,
}

/// A single analyst rating change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeDowngradeRow {
    /// Date of the rating change as a Unix timestamp.
    pub ts: i64,
    pub firm: String,
    pub from_grade: String,
    pub to_grade: String,
    /// Action kind as reported, e.g. "up", "down", "init", "main".
    pub action: String,
}
