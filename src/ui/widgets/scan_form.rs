// src/ui/widgets/scan_form.rs

use crate::app::App;
use crate::core::models::ScanMode;
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

/// Renders the scan mode selector.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = ScanMode::iter().map(|mode| mode.to_string()).collect();
    let selected = ScanMode::iter()
        .position(|mode| mode == app.mode)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider(" | ");
    frame.render_widget(tabs, area);
}

/// Renders the input form for the active mode.
///
/// Only the focused field gets the cursor; values typed for other modes are
/// kept and shown again when the operator switches back.
pub fn render_scan_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Target Vector");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = mode_fields(app);
    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(1)); // error line
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (label, value, masked)) in fields.iter().enumerate() {
        let focused = i == app.focus;
        let shown = if *masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!("{:<18}", format!("{}:", label)), Style::default().bold()),
            Span::styled(shown.clone(), style),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[i]);

        if focused && !app.is_scanning() {
            frame.set_cursor_position(Position::new(
                chunks[i].x + 18 + shown.chars().count() as u16,
                chunks[i].y,
            ));
        }
    }

    // Inline validation or scan error, kept until the next submit.
    if let Some(error) = &app.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[fields.len()],
        );
    }
}

/// Label, current value, and mask flag for each field of the active mode.
fn mode_fields(app: &App) -> Vec<(&'static str, &str, bool)> {
    match app.mode {
        ScanMode::File => vec![("File Path", app.form.file_path.as_str(), false)],
        ScanMode::Database => vec![(
            "Connection String",
            app.form.connection_string.as_str(),
            false,
        )],
        ScanMode::CloudBucket => vec![
            ("AWS Access Key", app.form.access_key.as_str(), false),
            ("AWS Secret Key", app.form.secret_key.as_str(), true),
            ("Bucket Name", app.form.bucket_name.as_str(), false),
            ("Region", app.form.region.as_str(), false),
        ],
    }
}
