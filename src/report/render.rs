//! Plain-text rendering of a [`Report`].
//!
//! The same strings back both the `--plain` output and the scrollable
//! detail pane of the TUI.

use std::fmt::Write as _;

use chrono::DateTime;

use crate::core::MarketError;
use crate::core::models::Action;
use crate::report::chart::{bar_chart, line_chart};
use crate::report::{Report, Sections};

const CHART_HEIGHT: usize = 10;

/// User-facing message for a failed fetch.
pub fn error_banner(e: &MarketError) -> String {
    match e {
        MarketError::InvalidTicker(_) => {
            "Invalid ticker! Please enter a valid stock ticker.".to_string()
        }
        other => format!("An error occurred: {other}. Please try again with a valid stock ticker."),
    }
}

/// Renders the whole report as plain text, `width` columns wide.
pub fn render_plain(report: &Report, width: usize) -> String {
    let sym = report.symbol.as_str();
    let chart_width = width.saturating_sub(12).max(20);
    let mut out = String::new();

    heading(&mut out, &format!("Daily closing price for {sym}"));
    if report.candles.is_empty() {
        let _ = writeln!(out, "No historical data available for this stock.");
    } else {
        let closes: Vec<f64> = report.candles.iter().map(|c| c.close).collect();
        for row in line_chart(&closes, chart_width, CHART_HEIGHT) {
            let _ = writeln!(out, "{row}");
        }
        let _ = writeln!(
            out,
            "{} bars ({}), {} to {}",
            report.candles.len(),
            report.range,
            fmt_date(report.candles[0].ts),
            fmt_date(report.candles[report.candles.len() - 1].ts),
        );
    }

    heading(&mut out, &format!("Last closing price for {sym}"));
    match report.last_close() {
        Some(price) => {
            let currency = report.quote.currency.as_deref().unwrap_or("");
            let _ = writeln!(out, "{price:.2} {currency}");
        }
        None => {
            let _ = writeln!(out, "No data available for today.");
        }
    }

    heading(&mut out, &format!("Daily volume for {sym}"));
    let volumes: Vec<f64> = report
        .candles
        .iter()
        .map(|c| c.volume.unwrap_or(0) as f64)
        .collect();
    if volumes.iter().all(|&v| v == 0.0) {
        let _ = writeln!(out, "No data available.");
    } else {
        for row in bar_chart(&volumes, chart_width, CHART_HEIGHT) {
            let _ = writeln!(out, "{row}");
        }
    }

    append_sections(&mut out, report, report.sections);

    out
}

/// Renders only the optional sections (the scrollable pane of the TUI).
///
/// `sections` picks which of the fetched sections to show, so the TUI can
/// hide a toggled-off section without a re-fetch.
pub fn render_sections(report: &Report, sections: Sections) -> String {
    let mut out = String::new();
    append_sections(&mut out, report, sections);
    out
}

fn append_sections(out: &mut String, report: &Report, sections: Sections) {
    if sections.actions {
        render_actions(out, &report.symbol, report.actions.as_deref());
    }
    if sections.holders {
        render_holders(out, report);
    }
    if sections.balance_sheet {
        render_balance_sheet(out, report);
    }
    if sections.cashflow {
        render_cashflow(out, report);
    }
    if sections.recommendations {
        render_recommendations(out, report);
    }
    if sections.ratios {
        render_ratios(out, report);
    }
}

fn render_actions(out: &mut String, sym: &str, actions: Option<&[Action]>) {
    heading(out, &format!("Stock actions for {sym}"));
    let rows: Vec<Vec<String>> = actions
        .unwrap_or_default()
        .iter()
        .map(|a| match *a {
            Action::Dividend { ts, amount } => vec![
                fmt_date(ts),
                "Dividend".to_string(),
                format!("{amount:.4}"),
            ],
            Action::Split {
                ts,
                numerator,
                denominator,
            } => vec![
                fmt_date(ts),
                "Split".to_string(),
                format!("{numerator}:{denominator}"),
            ],
        })
        .collect();
    if rows.is_empty() {
        let _ = writeln!(out, "No data available.");
    } else {
        table(out, &["Date", "Action", "Value"], &rows);
    }
}

fn render_holders(out: &mut String, report: &Report) {
    let sym = &report.symbol;
    heading(out, &format!("Institutional Investors for {sym}"));

    let rows: Vec<Vec<String>> = report
        .holders
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|h| {
            vec![
                h.holder.clone(),
                fmt_big(h.shares as f64),
                fmt_date(h.date_reported),
                format!("{:.2}%", h.pct_held * 100.0),
                fmt_big(h.value as f64),
            ]
        })
        .collect();
    if rows.is_empty() {
        let _ = writeln!(out, "No data available.");
    } else {
        table(out, &["Holder", "Shares", "Date Reported", "% Held", "Value"], &rows);
    }

    if let Some(major) = report.major_holders.as_deref()
        && !major.is_empty()
    {
        let _ = writeln!(out);
        let rows: Vec<Vec<String>> = major
            .iter()
            .map(|m| vec![m.category.clone(), m.value.clone()])
            .collect();
        table(out, &["Breakdown", "Value"], &rows);
    }
}

fn render_balance_sheet(out: &mut String, report: &Report) {
    heading(out, &format!("Quarterly Balance Sheet for {}", report.symbol));
    let rows: Vec<Vec<String>> = report
        .balance_sheet
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|r| {
            vec![
                fmt_date(r.period_end),
                fmt_opt_big(r.total_assets),
                fmt_opt_big(r.total_liabilities),
                fmt_opt_big(r.total_equity),
                fmt_opt_big(r.cash),
                fmt_opt_big(r.long_term_debt),
            ]
        })
        .collect();
    if rows.is_empty() {
        let _ = writeln!(out, "No data available.");
    } else {
        table(
            out,
            &["Period", "Total Assets", "Total Liab", "Equity", "Cash", "LT Debt"],
            &rows,
        );
    }
}

fn render_cashflow(out: &mut String, report: &Report) {
    heading(out, &format!("Quarterly Cashflow for {}", report.symbol));
    let rows: Vec<Vec<String>> = report
        .cashflow
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|r| {
            vec![
                fmt_date(r.period_end),
                fmt_opt_big(r.operating_cashflow),
                fmt_opt_big(r.capital_expenditures),
                fmt_opt_big(r.free_cash_flow),
                fmt_opt_big(r.net_income),
            ]
        })
        .collect();
    if rows.is_empty() {
        let _ = writeln!(out, "No data available.");
    } else {
        table(
            out,
            &["Period", "Operating CF", "Capex", "Free CF", "Net Income"],
            &rows,
        );
    }
}

fn render_recommendations(out: &mut String, report: &Report) {
    heading(out, &format!("Analyst Recommendations for {}", report.symbol));
    let Some(set) = report.recommendations.as_ref() else {
        let _ = writeln!(out, "No data available.");
        return;
    };
    if set.trend.is_empty() && set.upgrades.is_empty() {
        let _ = writeln!(out, "No data available.");
        return;
    }

    if let Some(summary) = &set.summary {
        let mean = summary
            .mean
            .map(|m| format!("{m:.1}"))
            .unwrap_or_else(|| "N/A".to_string());
        let key = summary.mean_key.as_deref().unwrap_or("n/a");
        let _ = writeln!(out, "Consensus: {key} (mean {mean})");
        let _ = writeln!(out);
    }

    if !set.trend.is_empty() {
        let rows: Vec<Vec<String>> = set
            .trend
            .iter()
            .map(|r| {
                vec![
                    r.period.clone(),
                    r.strong_buy.to_string(),
                    r.buy.to_string(),
                    r.hold.to_string(),
                    r.sell.to_string(),
                    r.strong_sell.to_string(),
                ]
            })
            .collect();
        table(
            out,
            &["Period", "Strong Buy", "Buy", "Hold", "Sell", "Strong Sell"],
            &rows,
        );
    }

    if !set.upgrades.is_empty() {
        let _ = writeln!(out);
        // Most recent changes last; show the tail to keep the table short.
        let start = set.upgrades.len().saturating_sub(10);
        let rows: Vec<Vec<String>> = set.upgrades[start..]
            .iter()
            .map(|u| {
                vec![
                    fmt_date(u.ts),
                    u.firm.clone(),
                    u.from_grade.clone(),
                    u.to_grade.clone(),
                    u.action.clone(),
                ]
            })
            .collect();
        table(out, &["Date", "Firm", "From", "To", "Action"], &rows);
    }
}

fn render_ratios(out: &mut String, report: &Report) {
    heading(out, &format!("Key Financial Ratios for {}", report.symbol));
    let Some(stats) = report.ratios.as_ref() else {
        let _ = writeln!(out, "No data available.");
        return;
    };

    let num = |v: Option<f64>| v.map(|v| format!("{v:.2}")).unwrap_or_else(na);
    let pct = |v: Option<f64>| {
        v.map(|v| format!("{:.2}%", v * 100.0)).unwrap_or_else(na)
    };

    let rows = vec![
        vec!["Price-to-Earnings (P/E)".to_string(), num(stats.trailing_pe)],
        vec!["Price-to-Book (P/B)".to_string(), num(stats.price_to_book)],
        vec![
            "Earnings per Share (EPS)".to_string(),
            num(stats.trailing_eps),
        ],
        vec!["Dividend Yield".to_string(), pct(stats.dividend_yield)],
        vec!["Return on Equity (ROE)".to_string(), pct(stats.return_on_equity)],
        vec!["Debt-to-Equity (D/E)".to_string(), num(stats.debt_to_equity)],
        vec![
            "Market Cap".to_string(),
            stats.market_cap.map(fmt_big).unwrap_or_else(na),
        ],
        vec!["Forward P/E".to_string(), num(stats.forward_pe)],
    ];
    table(out, &["Ratios", "Value"], &rows);
}

fn na() -> String {
    "N/A".to_string()
}

fn heading(out: &mut String, text: &str) {
    if !out.is_empty() {
        let _ = writeln!(out);
    }
    let _ = writeln!(out, "{text}");
    let _ = writeln!(out, "{}", "\u{2500}".repeat(text.chars().count()));
}

/// Writes an aligned table with a header row.
fn table(out: &mut String, headers: &[&str], rows: &[Vec<String>]) {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(cols).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let write_row = |out: &mut String, cells: &[String]| {
        let mut line = String::new();
        for (i, cell) in cells.iter().take(cols).enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            let _ = write!(line, "{:<width$}", cell, width = widths[i]);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    };

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    write_row(out, &header_cells);
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &sep);
    for row in rows {
        write_row(out, row);
    }
}

/// Formats a large magnitude with a T/B/M/K suffix.
pub(crate) fn fmt_big(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1e12 {
        format!("{:.2}T", v / 1e12)
    } else if abs >= 1e9 {
        format!("{:.2}B", v / 1e9)
    } else if abs >= 1e6 {
        format!("{:.2}M", v / 1e6)
    } else if abs >= 1e3 {
        format!("{:.2}K", v / 1e3)
    } else {
        format!("{v:.0}")
    }
}

fn fmt_opt_big(v: Option<f64>) -> String {
    v.map(fmt_big).unwrap_or_else(na)
}

/// Unix timestamp to `YYYY-MM-DD` (UTC).
pub(crate) fn fmt_date(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Candle, Quote};
    use crate::report::{Report, Sections};
    use crate::core::Range;

    fn quote(price: Option<f64>) -> Quote {
        Quote {
            symbol: "META".into(),
            shortname: Some("Meta Platforms, Inc.".into()),
            regular_market_price: price,
            regular_market_previous_close: Some(500.0),
            currency: Some("USD".into()),
            exchange: Some("NasdaqGS".into()),
            market_state: Some("CLOSED".into()),
        }
    }

    fn report(candles: Vec<Candle>, sections: Sections) -> Report {
        Report {
            symbol: "META".into(),
            quote: quote(Some(512.34)),
            candles,
            meta: None,
            range: Range::Ytd,
            sections,
            actions: None,
            holders: None,
            major_holders: None,
            balance_sheet: None,
            cashflow: None,
            recommendations: None,
            ratios: None,
        }
    }

    fn candle(ts: i64, close: f64, volume: u64) -> Candle {
        Candle {
            ts,
            open: close,
            high: close,
            low: close,
            close,
            volume: Some(volume),
        }
    }

    #[test]
    fn empty_history_uses_the_empty_state_line() {
        let text = render_plain(&report(Vec::new(), Sections::default()), 80);
        assert!(text.contains("No historical data available for this stock."));
    }

    #[test]
    fn last_close_comes_from_the_quote() {
        let text = render_plain(
            &report(vec![candle(1_700_000_000, 500.0, 1000)], Sections::default()),
            80,
        );
        assert!(text.contains("Last closing price for META"));
        assert!(text.contains("512.34 USD"));
    }

    #[test]
    fn enabled_empty_sections_say_no_data() {
        let sections = Sections::all();
        let text = render_plain(&report(Vec::new(), sections), 80);
        assert!(text.contains("Stock actions for META"));
        assert!(text.contains("Institutional Investors for META"));
        assert!(text.contains("Quarterly Balance Sheet for META"));
        assert!(text.contains("Quarterly Cashflow for META"));
        assert!(text.contains("Analyst Recommendations for META"));
        assert!(text.contains("Key Financial Ratios for META"));
        assert!(text.contains("No data available."));
    }

    #[test]
    fn toggled_off_sections_disappear_without_a_refetch() {
        let mut fetched = report(Vec::new(), Sections::all());
        fetched.holders = Some(Vec::new());
        fetched.ratios = Some(Default::default());

        // The holders toggle went off after the fetch; only ratios stay visible.
        let still_on = Sections {
            ratios: true,
            ..Sections::default()
        };
        let text = render_sections(&fetched, still_on.intersect(fetched.sections));
        assert!(text.contains("Key Financial Ratios for META"));
        assert!(!text.contains("Institutional Investors for META"));
    }

    #[test]
    fn disabled_sections_are_not_rendered() {
        let text = render_plain(&report(Vec::new(), Sections::default()), 80);
        assert!(!text.contains("Stock actions for META"));
        assert!(!text.contains("Key Financial Ratios for META"));
    }

    #[test]
    fn invalid_ticker_banner_matches_the_dashboard_wording() {
        let banner = error_banner(&MarketError::InvalidTicker("NOPE".into()));
        assert_eq!(banner, "Invalid ticker! Please enter a valid stock ticker.");

        let banner = error_banner(&MarketError::Data("boom".into()));
        assert!(banner.starts_with("An error occurred: "));
        assert!(banner.ends_with("Please try again with a valid stock ticker."));
    }

    #[test]
    fn tables_align_on_the_widest_cell() {
        let mut out = String::new();
        table(
            &mut out,
            &["Name", "Value"],
            &[
                vec!["a".to_string(), "1".to_string()],
                vec!["longer name".to_string(), "23".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name         Value");
        assert_eq!(lines[1], "-----------  -----");
        assert_eq!(lines[2], "a            1");
        assert_eq!(lines[3], "longer name  23");
    }

    #[test]
    fn fmt_big_picks_suffixes() {
        assert_eq!(fmt_big(1_250_000_000_000.0), "1.25T");
        assert_eq!(fmt_big(3_400_000_000.0), "3.40B");
        assert_eq!(fmt_big(2_500_000.0), "2.50M");
        assert_eq!(fmt_big(9_100.0), "9.10K");
        assert_eq!(fmt_big(42.0), "42");
    }

    #[test]
    fn fmt_date_is_utc_day() {
        assert_eq!(fmt_date(0), "1970-01-01");
        assert_eq!(fmt_date(1_696_032_000), "2023-09-30");
    }
}
