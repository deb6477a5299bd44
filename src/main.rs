// src/main.rs

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use dpdp_shield_console::app::{App, AppEvent, ExportJob, Screen};
use dpdp_shield_console::core::auth::CredentialStore;
use dpdp_shield_console::core::client::ApiClient;
use dpdp_shield_console::core::errors::ApiError;
use dpdp_shield_console::core::models::Session;
use dpdp_shield_console::{config, logging, ui};

/// Fixed name under which the exported certificate is saved.
const EXPORT_FILENAME: &str = "Audit_Report.pdf";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let client = Arc::new(ApiClient::new(config::api_base_url())?);
    let auth = Arc::new(CredentialStore::new());

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(8);

    // Resolve any persisted session while the UI shows the pending placeholder.
    {
        let auth = auth.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let session = auth.resolve();
            let _ = tx.send(AppEvent::SessionResolved(session)).await;
        });
    }

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &client, &auth)?;
        }
        app.on_tick();

        // Drain completed async work before the next draw.
        while let Ok(event) = rx.try_recv() {
            apply_event(&mut app, event, &tx, &client);
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

fn handle_events(
    app: &mut App,
    tx: &mpsc::Sender<AppEvent>,
    client: &Arc<ApiClient>,
    auth: &Arc<CredentialStore>,
) -> color_eyre::Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        // While the session is still resolving, only quitting is allowed.
        if matches!(app.session, Session::Pending) {
            if key.code == KeyCode::Esc {
                app.quit();
            }
            return Ok(());
        }
        match app.screen {
            Screen::Login => handle_login_input(app, key, tx, client, auth),
            Screen::Dashboard => handle_dashboard_input(app, key, tx, client, auth),
        }
    }
    Ok(())
}

/// Handles keys on the sign-in screen.
fn handle_login_input(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AppEvent>,
    client: &Arc<ApiClient>,
    auth: &Arc<CredentialStore>,
) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => match auth.sign_in(&app.login.secret) {
            Some(user) => {
                if app.apply_session(Session::Authenticated(user)) {
                    spawn_history_refresh(client.clone(), tx.clone());
                }
            }
            None => {
                app.login.error = Some("Access Denied: Invalid Credentials".to_string());
                app.login.secret.clear();
            }
        },
        KeyCode::Backspace => {
            app.login.secret.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.secret.push(c);
        }
        _ => {}
    }
}

/// Handles keys on the dashboard: mode switching, field edits, submit,
/// export, and sign-out.
fn handle_dashboard_input(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AppEvent>,
    client: &Arc<ApiClient>,
    auth: &Arc<CredentialStore>,
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('e') => start_export(app, tx, client),
            KeyCode::Char('l') => {
                auth.sign_out();
                app.sign_out();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Left => app.prev_mode(),
        KeyCode::Right => app.next_mode(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::PageUp => app.scroll_report_up(),
        KeyCode::PageDown => app.scroll_report_down(),
        KeyCode::Enter => {
            if let Some(request) = app.submit() {
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let outcome = client.dispatch(request).await.map_err(|e| e.to_string());
                    let _ = tx.send(AppEvent::ScanFinished(outcome)).await;
                });
            }
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

/// Applies one completed async result to the app state, chaining the
/// history refresh where the orchestration contract asks for it.
fn apply_event(
    app: &mut App,
    event: AppEvent,
    tx: &mpsc::Sender<AppEvent>,
    client: &Arc<ApiClient>,
) {
    match event {
        AppEvent::SessionResolved(session) => {
            if app.apply_session(session) {
                spawn_history_refresh(client.clone(), tx.clone());
            }
        }
        AppEvent::ScanFinished(outcome) => {
            if app.finish_scan(outcome) {
                spawn_history_refresh(client.clone(), tx.clone());
            }
        }
        AppEvent::HistoryFetched(outcome) => app.apply_history(outcome),
        AppEvent::ExportFinished(outcome) => app.finish_export(outcome),
    }
}

// Concurrent fetches may race; the last response to resolve wins.
fn spawn_history_refresh(client: Arc<ApiClient>, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let outcome = client.history().await.map_err(|e| e.to_string());
        let _ = tx.send(AppEvent::HistoryFetched(outcome)).await;
    });
}

fn start_export(app: &mut App, tx: &mpsc::Sender<AppEvent>, client: &Arc<ApiClient>) {
    if let Some(job) = app.start_export() {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = export_report(&client, job).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::ExportFinished(outcome)).await;
        });
    }
}

async fn export_report(client: &ApiClient, job: ExportJob) -> Result<PathBuf, ApiError> {
    let bytes = client.generate_pdf(&job.filename, &job.findings).await?;
    let path = PathBuf::from(EXPORT_FILENAME);
    tokio::fs::write(&path, bytes).await?;
    Ok(path)
}
