use serde::Serialize;

use crate::core::MarketError;

/* ----- QUOTE (shared by ticker/ and report/) ----- */

/// A snapshot quote from the v7 quote API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub shortname: Option<String>,
    /// Last regular-market price. Absent for symbols Yahoo does not price.
    pub regular_market_price: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub market_state: Option<String>,
}

/* ----- HISTORY ----- */

/// One OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

/// A corporate action reported alongside price history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Action {
    Dividend {
        ts: i64,
        amount: f64,
    },
    Split {
        ts: i64,
        numerator: u32,
        denominator: u32,
    },
}

impl Action {
    pub fn ts(&self) -> i64 {
        match *self {
            Action::Dividend { ts, .. } | Action::Split { ts, .. } => ts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryMeta {
    pub timezone: Option<String>,
    pub gmtoffset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryResponse {
    pub candles: Vec<Candle>,
    pub actions: Vec<Action>,
    pub adjusted: bool,
    pub meta: Option<HistoryMeta>,
}

/* ----- HISTORY PARAMS ----- */

/// Relative time window accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
            Range::Y2 => "2y",
            Range::Y5 => "5y",
            Range::Y10 => "10y",
            Range::Ytd => "ytd",
            Range::Max => "max",
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Range {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1d" => Ok(Range::D1),
            "5d" => Ok(Range::D5),
            "1mo" => Ok(Range::M1),
            "3mo" => Ok(Range::M3),
            "6mo" => Ok(Range::M6),
            "1y" => Ok(Range::Y1),
            "2y" => Ok(Range::Y2),
            "5y" => Ok(Range::Y5),
            "10y" => Ok(Range::Y10),
            "ytd" => Ok(Range::Ytd),
            "max" => Ok(Range::Max),
            other => Err(MarketError::Data(format!("unknown range '{other}'"))),
        }
    }
}

/// Bar width accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    I1m,
    I5m,
    I15m,
    I30m,
    I1h,
    D1,
    D5,
    W1,
    M1,
    M3,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
            Interval::D5 => "5d",
            Interval::W1 => "1wk",
            Interval::M1 => "1mo",
            Interval::M3 => "3mo",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Interval {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "1m" => Ok(Interval::I1m),
            "5m" => Ok(Interval::I5m),
            "15m" => Ok(Interval::I15m),
            "30m" => Ok(Interval::I30m),
            "1h" => Ok(Interval::I1h),
            "1d" => Ok(Interval::D1),
            "5d" => Ok(Interval::D5),
            "1wk" => Ok(Interval::W1),
            "1mo" => Ok(Interval::M1),
            "3mo" => Ok(Interval::M3),
            other => Err(MarketError::Data(format!("unknown interval '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_round_trips_through_from_str() {
        for r in [
            Range::D1,
            Range::D5,
            Range::M1,
            Range::M3,
            Range::M6,
            Range::Y1,
            Range::Y2,
            Range::Y5,
            Range::Y10,
            Range::Ytd,
            Range::Max,
        ] {
            assert_eq!(r.as_str().parse::<Range>().unwrap(), r);
        }
    }

    #[test]
    fn range_parse_is_case_insensitive() {
        assert_eq!("YTD".parse::<Range>().unwrap(), Range::Ytd);
        assert_eq!("1Mo".parse::<Range>().unwrap(), Range::M1);
    }

    #[test]
    fn unknown_range_is_rejected() {
        assert!("7w".parse::<Range>().is_err());
    }

    #[test]
    fn interval_round_trips_through_from_str() {
        for i in [
            Interval::I1m,
            Interval::I5m,
            Interval::I15m,
            Interval::I30m,
            Interval::I1h,
            Interval::D1,
            Interval::D5,
            Interval::W1,
            Interval::M1,
            Interval::M3,
        ] {
            assert_eq!(i.as_str().parse::<Interval>().unwrap(), i);
        }
    }
}
