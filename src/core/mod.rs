//! Core components of the `stockboard` client.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`MarketClient`] and its builder.
//! - The primary [`MarketError`] type.
//! - Shared data models like [`Quote`] and [`Candle`].
//! - Internal networking and authentication logic.

/// The main client (`MarketClient`), builder, and configuration.
pub mod client;
/// The primary error type (`MarketError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules (e.g., `Quote`, `Candle`).
pub mod models;
pub(crate) mod net;
pub(crate) mod quotes;
pub(crate) mod quotesummary;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::MarketClient`
pub use client::{MarketClient, MarketClientBuilder};
pub use error::MarketError;
pub use models::{Action, Candle, HistoryMeta, HistoryResponse, Interval, Quote, Range};
