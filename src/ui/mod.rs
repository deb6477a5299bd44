// src/ui/mod.rs

use crate::app::{App, Screen};
use crate::core::models::Session;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    // Session gate: while resolution is pending nothing else is shown.
    if matches!(app.session, Session::Pending) {
        render_pending(frame);
        return;
    }

    match app.screen {
        Screen::Login => widgets::login::render_login(frame, app, frame.area()),
        Screen::Dashboard => {
            let layout = layout::create_layout(frame.area());
            widgets::scan_form::render_tabs(frame, app, layout.tabs);
            widgets::scan_form::render_scan_form(frame, app, layout.form);
            widgets::report_view::render_report(frame, app, layout.report);
            widgets::history_view::render_history(frame, app, layout.history);
            widgets::footer::render_footer(frame, app, layout.footer);
        }
    }
}

fn render_pending(frame: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let placeholder = Paragraph::new("Loading Security Module...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(placeholder, rows[1]);
}
