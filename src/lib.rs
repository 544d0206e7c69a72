//! # stockboard
//!
//! A terminal stock dashboard backed by Yahoo Finance's public endpoints.
//!
//! The crate is split into a reusable client layer and the dashboard built
//! on top of it:
//!
//! - [`core`] holds the [`MarketClient`](core::MarketClient), its cookie and
//!   crumb handling, the error type and shared models.
//! - [`history`], [`holders`], [`fundamentals`], [`analysis`] and [`stats`]
//!   each wrap one group of API endpoints.
//! - [`ticker`] is a per-symbol facade over all of the above.
//! - [`report`] fetches everything one dashboard render needs in a single
//!   pass and renders it as plain text.
//! - [`app`] is the interactive terminal UI.
//!
//! ## Example
//!
//! ```no_run
//! use stockboard::core::{MarketClient, Range, Interval};
//! use stockboard::ticker::Ticker;
//!
//! # async fn example() -> Result<(), stockboard::core::MarketError> {
//! let client = MarketClient::builder().build()?;
//! let ticker = Ticker::new(&client, "META");
//!
//! let quote = ticker.quote().await?;
//! let candles = ticker.history(Range::Ytd, Interval::D1).await?;
//! println!("{}: {:?} ({} bars)", quote.symbol, quote.regular_market_price, candles.len());
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod app;
pub mod core;
pub mod fundamentals;
pub mod history;
pub mod holders;
pub mod report;
pub mod stats;
pub mod ticker;

pub use core::{MarketClient, MarketClientBuilder, MarketError};
pub use report::{Report, Sections};
pub use ticker::Ticker;
