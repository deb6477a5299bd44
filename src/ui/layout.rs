// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the dashboard screen.
///
/// Each `Rect` is a widget slot: the mode tabs on top, the scan form under
/// them, the report and history side by side, and the key-hint footer at
/// the bottom.
pub struct AppLayout {
    pub tabs: Rect,
    pub form: Rect,
    pub report: Rect,
    pub history: Rect,
    pub footer: Rect,
}

pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[2]);

    AppLayout {
        tabs: main_chunks[0],
        form: main_chunks[1],
        report: content_chunks[0],
        history: content_chunks[1],
        footer: main_chunks[3],
    }
}
