use std::io::{self, Write as _};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stockboard::app::{self, App};
use stockboard::core::{Interval, MarketClient, Range};
use stockboard::report::{Report, render};
use stockboard::Sections;

/// Terminal stock dashboard backed by Yahoo Finance.
#[derive(Parser, Debug)]
#[command(name = "stockboard", version, about)]
struct Cli {
    /// Stock ticker to load on startup.
    #[arg(default_value = "META")]
    ticker: String,

    /// Print the report once and exit instead of starting the TUI.
    #[arg(long)]
    plain: bool,

    /// Show dividends and splits.
    #[arg(long)]
    actions: bool,

    /// Show institutional shareholders.
    #[arg(long)]
    holders: bool,

    /// Show the quarterly balance sheet.
    #[arg(long)]
    balance_sheet: bool,

    /// Show the quarterly cash flow statement.
    #[arg(long)]
    cashflow: bool,

    /// Show analyst recommendations.
    #[arg(long)]
    recommendations: bool,

    /// Show key financial ratios.
    #[arg(long)]
    ratios: bool,

    /// Enable every optional section.
    #[arg(long)]
    all: bool,

    /// History range (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max).
    #[arg(long, default_value = "ytd")]
    range: String,

    /// Bar interval (1m, 5m, 15m, 30m, 1h, 1d, 5d, 1wk, 1mo, 3mo).
    #[arg(long, default_value = "1d")]
    interval: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

impl Cli {
    fn sections(&self) -> Sections {
        if self.all {
            return Sections::all();
        }
        Sections {
            actions: self.actions,
            holders: self.holders,
            balance_sheet: self.balance_sheet,
            cashflow: self.cashflow,
            recommendations: self.recommendations,
            ratios: self.ratios,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let range: Range = cli.range.parse().context("invalid --range")?;
    let interval: Interval = cli.interval.parse().context("invalid --interval")?;
    let sections = cli.sections();

    let client = MarketClient::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .context("failed to build HTTP client")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.plain {
        let symbol = cli.ticker.trim().to_ascii_uppercase();
        match rt.block_on(Report::build(&client, &symbol, range, interval, sections)) {
            Ok(report) => {
                let width = 100;
                io::stdout().write_all(render::render_plain(&report, width).as_bytes())?;
                Ok(())
            }
            Err(e) => {
                eprintln!("error: {}", render::error_banner(&e));
                std::process::exit(1);
            }
        }
    } else {
        let app = App::new(cli.ticker.trim().to_ascii_uppercase(), sections);
        app::run(&rt, &client, app, range, interval).context("terminal error")
    }
}
