// src/ui/widgets/login.rs

use crate::app::App;
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the sign-in screen: a centered card with a masked secret field.
pub fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(50, 12, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("DPDP Shield | Enterprise Security Access");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // label
            Constraint::Length(1), // input
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Min(0),    // hint
        ])
        .split(inner);

    frame.render_widget(Paragraph::new("Security Key".bold()), chunks[0]);

    // The secret is never echoed; render a mask of the same length.
    let mask = "•".repeat(app.login.secret.chars().count());
    frame.render_widget(
        Paragraph::new(mask).style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );
    frame.set_cursor_position(Position::new(
        chunks[1].x + app.login.secret.chars().count() as u16,
        chunks[1].y,
    ));

    if let Some(error) = &app.login.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[3],
        );
    }

    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" to authenticate, "),
        Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" to quit."),
    ]);
    frame.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[4]);
}

/// Centers a fixed-height card of `percent_x` width within `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
