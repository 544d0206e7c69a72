//! Historical OHLCV data via the chart v8 endpoint.

mod assemble;
mod fetch;
pub(crate) mod wire;

use assemble::{assemble_candles, extract_actions};
use fetch::fetch_chart;

use crate::core::models::{Candle, HistoryMeta, HistoryResponse};
use crate::core::{Interval, MarketClient, MarketError, Range};
use crate::history::wire::ChartMeta;

/// A builder for fetching historical price data for a single symbol.
#[derive(Clone)]
pub struct HistoryBuilder {
    client: MarketClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: Interval,
    auto_adjust: bool,
    include_actions: bool,
    keepna: bool,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol.
    ///
    /// Defaults: year-to-date range, daily interval, auto-adjusted prices,
    /// actions included, rows with missing OHLC dropped.
    pub fn new(client: &MarketClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Some(Range::Ytd),
            period: None,
            interval: Interval::D1,
            auto_adjust: true,
            include_actions: true,
            keepna: false,
        }
    }

    /// Sets a relative time range for the request (e.g., `1y`, `6mo`).
    ///
    /// This will override any previously set period using `between()`.
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an absolute time period for the request using start and end timestamps.
    ///
    /// This will override any previously set range using `range()`.
    #[must_use]
    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
        self
    }

    /// Sets the time interval for each data point (candle).
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets whether to automatically adjust prices for splits and dividends. (Default: `true`)
    #[must_use]
    pub fn auto_adjust(mut self, yes: bool) -> Self {
        self.auto_adjust = yes;
        self
    }

    /// Sets whether to request corporate actions (dividends and splits). (Default: `true`)
    #[must_use]
    pub fn actions(mut self, yes: bool) -> Self {
        self.include_actions = yes;
        self
    }

    /// Sets whether to keep data rows that have missing OHLC values. (Default: `false`)
    ///
    /// If `true`, missing values are represented as `f64::NAN`. If `false`, rows with any missing
    /// OHLC values are dropped.
    #[must_use]
    pub fn keepna(mut self, yes: bool) -> Self {
        self.keepna = yes;
        self
    }

    /// Executes the request and returns only the price candles.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<Candle>, MarketError> {
        let resp = self.fetch_full().await?;
        Ok(resp.candles)
    }

    /// Executes the request and returns the full response, including candles, actions, and metadata.
    ///
    /// An empty candle list is not an error; callers decide how to present it.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the date period is inverted, or
    /// the response cannot be parsed.
    pub async fn fetch_full(self) -> Result<HistoryResponse, MarketError> {
        let fetched = fetch_chart(
            &self.client,
            &self.symbol,
            self.range,
            self.period,
            self.interval,
            self.include_actions,
        )
        .await?;

        let actions = extract_actions(&fetched.events);
        let candles = assemble_candles(
            &fetched.ts,
            &fetched.quote,
            &fetched.adjclose,
            self.auto_adjust,
            self.keepna,
        );

        Ok(HistoryResponse {
            candles,
            actions,
            adjusted: self.auto_adjust,
            meta: map_meta(&fetched.meta),
        })
    }
}

fn map_meta(m: &Option<ChartMeta>) -> Option<HistoryMeta> {
    m.as_ref().map(|mm| HistoryMeta {
        timezone: mm.timezone.clone(),
        gmtoffset: mm.gmtoffset,
    })
}
