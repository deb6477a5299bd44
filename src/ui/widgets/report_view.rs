// src/ui/widgets/report_view.rs

use crate::app::{App, ExportStatus, SPINNER_CHARS};
use crate::core::models::Compliance;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

/// Renders the report panel: placeholder, spinner, or the held report with
/// its findings table.
pub fn render_report(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Scan Report (scroll with PgUp PgDn)");

    if app.is_scanning() {
        let spinner_char = SPINNER_CHARS[app.spinner_frame];
        let scanning = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("Scanning... Please wait."),
        ]))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(scanning, area);
        return;
    }

    let Some(report) = &app.report else {
        let placeholder = Paragraph::new("Scan results will appear here...")
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // filename + risk badge
            Constraint::Length(1), // totals + verdict
            Constraint::Length(1), // export status
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // findings table
        ])
        .split(inner);

    // Risk score is shown exactly as the service asserted it.
    let risk_style = if report.risk_score == "HIGH" {
        Style::default().fg(Color::Red).bold()
    } else {
        Style::default().fg(Color::Green).bold()
    };
    let header = Line::from(vec![
        Span::styled(report.filename.clone(), Style::default().bold()),
        Span::raw("  "),
        Span::styled(format!("{} RISK", report.risk_score), risk_style),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let verdict = report.compliance();
    let verdict_style = match verdict {
        Compliance::Compliant => Style::default().fg(Color::Green),
        Compliance::NonCompliant => Style::default().fg(Color::Red),
    };
    let totals = Line::from(vec![
        Span::raw(format!("Total Leaks: {}", report.total_leaks)),
        Span::raw("   Status: "),
        Span::styled(verdict.to_string(), verdict_style),
    ]);
    frame.render_widget(Paragraph::new(totals), chunks[1]);

    render_export_status(frame, &app.export, chunks[2]);

    if report.details.is_empty() {
        frame.render_widget(
            Paragraph::new("✓ No sensitive data found.").style(Style::default().fg(Color::Green)),
            chunks[4],
        );
        return;
    }

    let rows: Vec<Row> = report
        .details
        .iter()
        .map(|detail| {
            Row::new(vec![
                Cell::from(detail.kind.clone()).style(Style::default().fg(Color::Red).bold()),
                Cell::from(detail.location.to_string()),
                Cell::from(detail.value_masked.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ],
    )
    .header(Row::new(vec!["Type", "Location", "Detected Data"]).style(Style::default().bold()));

    let mut state = TableState::default().with_offset(app.report_scroll);
    frame.render_stateful_widget(table, chunks[4], &mut state);
}

fn render_export_status(frame: &mut Frame, export: &ExportStatus, area: Rect) {
    let line = match export {
        ExportStatus::Idle => Line::from(Span::styled(
            "Ctrl+E exports the audit certificate.",
            Style::default().fg(Color::DarkGray),
        )),
        ExportStatus::Exporting => Line::from(Span::styled(
            "Exporting...",
            Style::default().fg(Color::Cyan),
        )),
        ExportStatus::Saved(path) => Line::from(Span::styled(
            format!("Saved {}", path.display()),
            Style::default().fg(Color::Green),
        )),
        ExportStatus::Failed(message) => Line::from(Span::styled(
            format!("Export failed: {}", message),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
