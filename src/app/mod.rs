//! Interactive terminal dashboard.

pub mod state;
mod ui;

pub use state::{App, AppAction, InputMode};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::core::{Interval, MarketClient, Range};
use crate::report::{Report, render};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the dashboard until the user quits.
///
/// Fetches run on `rt` while the terminal stays in raw mode; fetch errors
/// become an on-screen banner instead of ending the loop.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or drawn to.
pub fn run(
    rt: &Runtime,
    client: &MarketClient,
    mut app: App,
    range: Range,
    interval: Interval,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(rt, client, &mut app, range, interval, &mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    rt: &Runtime,
    client: &MarketClient,
    app: &mut App,
    range: Range,
    interval: Interval,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            AppAction::Quit => return Ok(()),
            AppAction::None => {}
            AppAction::Fetch => {
                let symbol = app.input.clone();
                debug!(%symbol, "fetching report");
                app.status = Some(format!("Fetching {symbol}..."));
                app.error = None;
                terminal.draw(|frame| ui::draw(frame, app))?;

                let sections = app.sections;
                match rt.block_on(Report::build(client, &symbol, range, interval, sections)) {
                    Ok(report) => app.set_report(report),
                    Err(e) => app.set_error(render::error_banner(&e)),
                }
            }
        }
    }
}
