//! Widget layout for the dashboard.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap};

use crate::app::state::{App, InputMode};
use crate::report::render;

const SIDEBAR_WIDTH: u16 = 34;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(frame.area());

    draw_sidebar(frame, app, chunks[0]);
    draw_main(frame, app, chunks[1]);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    let input_style = match app.mode {
        InputMode::Edit => Style::default().fg(Color::Yellow),
        InputMode::View => Style::default(),
    };
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter a valid stock ticker..."),
    );
    frame.render_widget(input, chunks[0]);
    if app.mode == InputMode::Edit {
        frame.set_cursor_position((
            chunks[0].x + 1 + app.input.chars().count() as u16,
            chunks[0].y + 1,
        ));
    }

    let s = &app.sections;
    let checkbox = |on: bool, key: &str, label: &str| {
        Line::from(vec![
            Span::raw(if on { "[x] " } else { "[ ] " }),
            Span::styled(format!("({key}) "), Style::default().fg(Color::DarkGray)),
            Span::raw(label.to_string()),
        ])
    };
    let boxes = Paragraph::new(vec![
        checkbox(s.actions, "a", "Stock Actions"),
        checkbox(s.holders, "h", "Institutional Shareholders"),
        checkbox(s.balance_sheet, "b", "Quarterly Balance Sheet"),
        checkbox(s.cashflow, "c", "Quarterly Cashflow"),
        checkbox(s.recommendations, "r", "Analyst Recommendation"),
        checkbox(s.ratios, "t", "Ratios"),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Display Additional Information"),
    );
    frame.render_widget(boxes, chunks[1]);

    let hints = Paragraph::new(vec![
        Line::from("Enter  fetch"),
        Line::from("i /    edit ticker"),
        Line::from("j k    scroll"),
        Line::from("q      quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(hints, chunks[2]);
}

fn draw_main(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints = Vec::new();
    let has_banner = app.error.is_some() || app.status.is_some();
    if has_banner {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Length(1),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Min(0),
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut idx = 0;
    if has_banner {
        let (text, style) = if let Some(err) = &app.error {
            (err.as_str(), Style::default().fg(Color::Red))
        } else {
            (
                app.status.as_deref().unwrap_or(""),
                Style::default().fg(Color::Yellow),
            )
        };
        let banner = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[idx]);
        idx += 1;
    }

    let Some(report) = &app.report else {
        let empty = Paragraph::new("Enter a ticker and press Enter.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, chunks[idx]);
        return;
    };

    let mut summary = format!(
        "{}  last close {}",
        report.symbol,
        report
            .last_close()
            .map(|p| format!("{p:.2}"))
            .unwrap_or_else(|| "No data available for today.".to_string()),
    );
    if let Some(name) = &report.quote.shortname {
        summary = format!("{summary}  ({name})");
    }
    if app.stale {
        summary.push_str("  [sections changed, press Enter]");
    }
    let summary = Paragraph::new(summary).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(summary, chunks[idx]);
    idx += 1;

    draw_close_chart(frame, app, chunks[idx]);
    idx += 1;
    draw_volume_chart(frame, app, chunks[idx]);
    idx += 1;
    draw_details(frame, app, chunks[idx]);
}

fn draw_close_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else { return };
    let title = format!("Daily closing price for {}", report.symbol);

    if report.candles.is_empty() {
        let empty = Paragraph::new("No historical data available for this stock.")
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> = report
        .candles
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64, c.close))
        .collect();
    let (min, max) = bounds(points.iter().map(|p| p.1));

    let datasets = vec![
        Dataset::default()
            .marker(ratatui::symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
    ];
    let first = report.candles[0].ts;
    let last = report.candles[report.candles.len() - 1].ts;
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len() - 1).max(1) as f64])
                .labels(vec![
                    Span::raw(render::fmt_date(first)),
                    Span::raw(render::fmt_date(last)),
                ]),
        )
        .y_axis(
            Axis::default()
                .bounds([min, max])
                .labels(vec![
                    Span::raw(format!("{min:.2}")),
                    Span::raw(format!("{max:.2}")),
                ]),
        );
    frame.render_widget(chart, area);
}

fn draw_volume_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else { return };
    let title = format!("Daily volume for {}", report.symbol);

    let points: Vec<(f64, f64)> = report
        .candles
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64, c.volume.unwrap_or(0) as f64))
        .collect();

    if points.iter().all(|p| p.1 == 0.0) {
        let empty = Paragraph::new("No data available.")
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let max = points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
    let datasets = vec![
        Dataset::default()
            .marker(ratatui::symbols::Marker::Bar)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(Color::Magenta))
            .data(&points),
    ];
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(Axis::default().bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64]))
        .y_axis(
            Axis::default()
                .bounds([0.0, max])
                .labels(vec![Span::raw("0"), Span::raw(render::fmt_big(max))]),
        );
    frame.render_widget(chart, area);
}

fn draw_details(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.report else { return };

    // Current toggles drive the pane; a toggled-off section disappears
    // right away, a newly toggled-on one waits for the next fetch.
    let visible = app.sections.intersect(report.sections);
    if !visible.any() {
        let hint = Paragraph::new("Toggle sections in the sidebar to see more.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Details"));
        frame.render_widget(hint, area);
        return;
    }

    // The plain renderer already produces aligned tables; show its section
    // output (everything after the charts) in a scrollable pane.
    let text = render::render_sections(report, visible);
    let details = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Details"));
    frame.render_widget(details, area);
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}
