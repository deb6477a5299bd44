// src/ui/widgets/history_view.rs

use crate::app::App;
use chrono::NaiveDateTime;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Renders the audit log panel. The sequence is shown exactly as the server
/// ordered it; a fetch failure is surfaced above the table without touching
/// the rest of the dashboard.
pub fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Recent Audit Logs");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    if let Some(error) = &app.history_error {
        frame.render_widget(
            Paragraph::new(format!("History unavailable: {}", error))
                .style(Style::default().fg(Color::Red)),
            chunks[0],
        );
    }

    if app.history.is_empty() {
        frame.render_widget(
            Paragraph::new("No scans recorded yet.").style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
        return;
    }

    let rows: Vec<Row> = app
        .history
        .iter()
        .map(|item| {
            let risk_style = if item.risk == "HIGH" {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(item.filename.clone()),
                Cell::from(format_date(&item.date)),
                Cell::from(format!("{} Leaks", item.leaks)),
                Cell::from(item.risk.clone()).style(risk_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(Row::new(vec!["Target", "Timestamp", "Findings", "Verdict"]).style(Style::default().bold()));

    frame.render_widget(table, chunks[1]);
}

// Server timestamps are "%Y-%m-%d %H:%M:%S"; anything else is shown raw.
fn format_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
