//! A per-symbol facade over the API modules.

use crate::analysis;
use crate::core::models::{Action, Candle, HistoryResponse, Quote};
use crate::core::quotes::fetch_v7_quotes;
use crate::core::{Interval, MarketClient, MarketError, Range};
use crate::fundamentals::{self, BalanceSheetRow, CashflowRow};
use crate::history::HistoryBuilder;
use crate::holders::{self, InstitutionalHolder, MajorHolder};
use crate::stats::{self, KeyStats};

/// A handle to a single symbol, wrapping a [`MarketClient`].
///
/// All methods hit the network on every call; nothing is cached.
#[derive(Clone)]
pub struct Ticker {
    client: MarketClient,
    symbol: String,
}

impl Ticker {
    pub fn new(client: &MarketClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches a snapshot quote.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::InvalidTicker`] when Yahoo returns no quote
    /// record for the symbol at all, and other variants for transport or
    /// decode failures.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn quote(&self) -> Result<Quote, MarketError> {
        let nodes = fetch_v7_quotes(&self.client, &[&self.symbol]).await?;
        let node = nodes
            .into_iter()
            .next()
            .ok_or_else(|| MarketError::InvalidTicker(self.symbol.clone()))?;

        Ok(Quote {
            symbol: node.symbol.unwrap_or_else(|| self.symbol.clone()),
            shortname: node.short_name,
            regular_market_price: node.regular_market_price,
            regular_market_previous_close: node.regular_market_previous_close,
            currency: node.currency,
            exchange: node.full_exchange_name.or(node.exchange),
            market_state: node.market_state,
        })
    }

    /// Returns a builder for historical price data.
    pub fn history_builder(&self) -> HistoryBuilder {
        HistoryBuilder::new(&self.client, &self.symbol)
    }

    /// Fetches historical candles for a relative range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn history(
        &self,
        range: Range,
        interval: Interval,
    ) -> Result<Vec<Candle>, MarketError> {
        self.history_builder()
            .range(range)
            .interval(interval)
            .fetch()
            .await
    }

    /// Fetches candles, actions and metadata in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn history_full(
        &self,
        range: Range,
        interval: Interval,
    ) -> Result<HistoryResponse, MarketError> {
        self.history_builder()
            .range(range)
            .interval(interval)
            .fetch_full()
            .await
    }

    /// Fetches dividends and splits over a range (defaults to `max`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn actions(&self, range: Option<Range>) -> Result<Vec<Action>, MarketError> {
        let resp = self
            .history_builder()
            .range(range.unwrap_or(Range::Max))
            .fetch_full()
            .await?;
        Ok(resp.actions)
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn institutional_holders(&self) -> Result<Vec<InstitutionalHolder>, MarketError> {
        holders::institutional_holders(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn major_holders(&self) -> Result<Vec<MajorHolder>, MarketError> {
        holders::major_holders(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn balance_sheet(&self) -> Result<Vec<BalanceSheetRow>, MarketError> {
        fundamentals::balance_sheet(&self.client, &self.symbol, false).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn quarterly_balance_sheet(&self) -> Result<Vec<BalanceSheetRow>, MarketError> {
        fundamentals::balance_sheet(&self.client, &self.symbol, true).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn cashflow(&self) -> Result<Vec<CashflowRow>, MarketError> {
        fundamentals::cashflow(&self.client, &self.symbol, false).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn quarterly_cashflow(&self) -> Result<Vec<CashflowRow>, MarketError> {
        fundamentals::cashflow(&self.client, &self.symbol, true).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn recommendations(&self) -> Result<Vec<analysis::RecommendationRow>, MarketError> {
        analysis::recommendations(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn recommendations_summary(
        &self,
    ) -> Result<Option<analysis::RecommendationSummary>, MarketError> {
        analysis::recommendations_summary(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn upgrades_downgrades(
        &self,
    ) -> Result<Vec<analysis::UpgradeDowngradeRow>, MarketError> {
        analysis::upgrades_downgrades(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn key_stats(&self) -> Result<KeyStats, MarketError> {
        stats::key_stats(&self.client, &self.symbol).await
    }
}
