// src/ui/widgets/footer.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.is_scanning() {
        Line::from(vec![
            Span::raw("Scanning... "),
            Span::styled("[Esc]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[← →]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Mode  "),
            Span::styled("[Tab]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Field  "),
            Span::styled("[Enter]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Scan  "),
            Span::styled("[Ctrl+E]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Export  "),
            Span::styled("[Ctrl+L]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Sign Out  "),
            Span::styled("[Esc]", Style::new().bold().fg(Color::Yellow)),
            Span::raw(" Quit"),
        ])
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
