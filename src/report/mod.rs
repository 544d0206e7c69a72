//! Assembles a full dashboard report for one symbol.

pub mod chart;
pub mod render;

use tracing::warn;

use crate::analysis::{RecommendationRow, RecommendationSummary, UpgradeDowngradeRow};
use crate::core::models::{Action, Candle, HistoryMeta, Quote};
use crate::core::{Interval, MarketClient, MarketError, Range};
use crate::fundamentals::{BalanceSheetRow, CashflowRow};
use crate::holders::{InstitutionalHolder, MajorHolder};
use crate::stats::KeyStats;
use crate::ticker::Ticker;

/// Which optional sections to fetch and show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sections {
    pub actions: bool,
    pub holders: bool,
    pub balance_sheet: bool,
    pub cashflow: bool,
    pub recommendations: bool,
    pub ratios: bool,
}

impl Sections {
    /// All sections enabled.
    pub fn all() -> Self {
        Self {
            actions: true,
            holders: true,
            balance_sheet: true,
            cashflow: true,
            recommendations: true,
            ratios: true,
        }
    }

    /// Sections enabled in both `self` and `other`.
    #[must_use]
    pub fn intersect(self, other: Sections) -> Sections {
        Sections {
            actions: self.actions && other.actions,
            holders: self.holders && other.holders,
            balance_sheet: self.balance_sheet && other.balance_sheet,
            cashflow: self.cashflow && other.cashflow,
            recommendations: self.recommendations && other.recommendations,
            ratios: self.ratios && other.ratios,
        }
    }

    pub fn any(&self) -> bool {
        self.actions
            || self.holders
            || self.balance_sheet
            || self.cashflow
            || self.recommendations
            || self.ratios
    }
}

/// Analyst coverage bundled for the recommendations section.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationSet {
    pub trend: Vec<RecommendationRow>,
    pub summary: Option<RecommendationSummary>,
    pub upgrades: Vec<UpgradeDowngradeRow>,
}

/// Everything one dashboard render needs, fetched in a single pass.
#[derive(Debug, Clone)]
pub struct Report {
    pub symbol: String,
    pub quote: Quote,
    pub candles: Vec<Candle>,
    pub meta: Option<HistoryMeta>,
    pub range: Range,
    pub sections: Sections,

    pub actions: Option<Vec<Action>>,
    pub holders: Option<Vec<InstitutionalHolder>>,
    pub major_holders: Option<Vec<MajorHolder>>,
    pub balance_sheet: Option<Vec<BalanceSheetRow>>,
    pub cashflow: Option<Vec<CashflowRow>>,
    pub recommendations: Option<RecommendationSet>,
    pub ratios: Option<KeyStats>,
}

impl Report {
    /// Fetches a report for `symbol`.
    ///
    /// The quote and price history are required; a symbol with no quote
    /// record or no last price fails with [`MarketError::InvalidTicker`].
    /// Optional sections that fail to load are logged and left out so one
    /// flaky endpoint never takes down the whole view.
    ///
    /// # Errors
    ///
    /// Returns an error when the quote or price history cannot be fetched.
    pub async fn build(
        client: &MarketClient,
        symbol: &str,
        range: Range,
        interval: Interval,
        sections: Sections,
    ) -> Result<Report, MarketError> {
        let ticker = Ticker::new(client, symbol);

        let quote = ticker.quote().await?;
        if quote.regular_market_price.is_none() {
            return Err(MarketError::InvalidTicker(symbol.to_string()));
        }

        let history = ticker.history_full(range, interval).await?;

        let (actions, holders, major_holders, balance_sheet, cashflow, recommendations, ratios) = tokio::join!(
            fetch_if(sections.actions, "actions", ticker.actions(Some(range))),
            fetch_if(sections.holders, "holders", ticker.institutional_holders()),
            fetch_if(sections.holders, "major_holders", ticker.major_holders()),
            fetch_if(
                sections.balance_sheet,
                "balance_sheet",
                ticker.quarterly_balance_sheet(),
            ),
            fetch_if(sections.cashflow, "cashflow", ticker.quarterly_cashflow()),
            fetch_if(
                sections.recommendations,
                "recommendations",
                fetch_recommendation_set(&ticker),
            ),
            fetch_if(sections.ratios, "ratios", ticker.key_stats()),
        );

        Ok(Report {
            symbol: quote.symbol.clone(),
            quote,
            candles: history.candles,
            meta: history.meta,
            range,
            sections,
            actions,
            holders,
            major_holders,
            balance_sheet,
            cashflow,
            recommendations,
            ratios,
        })
    }

    /// Last close from history, falling back to the quote price.
    pub fn last_close(&self) -> Option<f64> {
        self.quote
            .regular_market_price
            .or_else(|| self.candles.last().map(|c| c.close))
    }
}

async fn fetch_if<T>(
    enabled: bool,
    section: &str,
    fut: impl Future<Output = Result<T, MarketError>>,
) -> Option<T> {
    if !enabled {
        return None;
    }
    match fut.await {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(section, error = %e, "optional section failed, leaving it out");
            None
        }
    }
}

async fn fetch_recommendation_set(ticker: &Ticker) -> Result<RecommendationSet, MarketError> {
    let trend = ticker.recommendations().await?;
    let summary = ticker.recommendations_summary().await.unwrap_or_else(|e| {
        warn!(error = %e, "recommendation summary failed");
        None
    });
    let upgrades = ticker.upgrades_downgrades().await.unwrap_or_else(|e| {
        warn!(error = %e, "upgrade/downgrade history failed");
        Vec::new()
    });
    Ok(RecommendationSet {
        trend,
        summary,
        upgrades,
    })
}
