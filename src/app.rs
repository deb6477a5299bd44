// src/app.rs

use std::path::PathBuf;

use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::core::models::{HistoryItem, LeakDetail, ScanMode, ScanReport, ScanRequest, Session};
use crate::core::request::{build_request, ScanForm};

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Completed async work, delivered back to the event loop over the channel.
#[derive(Debug)]
pub enum AppEvent {
    SessionResolved(Session),
    ScanFinished(Result<ScanReport, String>),
    HistoryFetched(Result<Vec<HistoryItem>, String>),
    ExportFinished(Result<PathBuf, String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Busy flag for the single in-flight scan. While `Scanning`, further
/// submits are silently ignored; there is no queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
}

/// Outcome channel for the PDF export, kept separate from the scan error so
/// a failed export never masks or clobbers scan state.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportStatus {
    Idle,
    Exporting,
    Saved(PathBuf),
    Failed(String),
}

/// Payload handed to the export task: everything the service needs to render
/// the certificate for the currently held report.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportJob {
    pub filename: String,
    pub findings: Vec<LeakDetail>,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub secret: String,
    pub error: Option<String>,
}

/// Application state and the orchestration rules around it.
///
/// All mutation happens through the handlers below, each reacting to one
/// input event: mode switch, field edit, submit, sign-out, or a completed
/// async result. Network and terminal I/O live elsewhere, which keeps the
/// state machine testable on its own.
pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub screen: Screen,
    pub phase: ScanPhase,
    pub mode: ScanMode,
    pub form: ScanForm,
    pub focus: usize,
    pub login: LoginForm,
    pub report: Option<ScanReport>,
    pub error: Option<String>,
    pub history: Vec<HistoryItem>,
    pub history_error: Option<String>,
    pub export: ExportStatus,
    pub spinner_frame: usize,
    pub report_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            session: Session::Pending,
            screen: Screen::Dashboard,
            phase: ScanPhase::Idle,
            mode: ScanMode::File,
            form: ScanForm::default(),
            focus: 0,
            login: LoginForm::default(),
            report: None,
            error: None,
            history: Vec::new(),
            history_error: None,
            export: ExportStatus::Idle,
            spinner_frame: 0,
            report_scroll: 0,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self.phase, ScanPhase::Scanning)
    }

    pub fn on_tick(&mut self) {
        if self.is_scanning() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn scroll_report_up(&mut self) {
        self.report_scroll = self.report_scroll.saturating_sub(1);
    }

    pub fn scroll_report_down(&mut self) {
        self.report_scroll = self.report_scroll.saturating_add(1);
    }

    // --- Session gate ---

    /// Applies a resolved session value.
    ///
    /// Returns `true` when the transition into an authenticated session
    /// should trigger the initial history fetch. A transition to
    /// `Unauthenticated` redirects to the sign-in screen exactly once; a
    /// repeated unauthenticated value is a no-op.
    pub fn apply_session(&mut self, session: Session) -> bool {
        match session {
            Session::Pending => {
                self.session = Session::Pending;
                false
            }
            Session::Authenticated(user) => {
                let fresh = !self.session.is_authenticated();
                if fresh {
                    info!(user = %user.name, "Session established.");
                }
                self.session = Session::Authenticated(user);
                self.screen = Screen::Dashboard;
                self.login.secret.clear();
                self.login.error = None;
                fresh
            }
            Session::Unauthenticated => {
                if !matches!(self.session, Session::Unauthenticated) {
                    info!("No authenticated session; redirecting to sign-in.");
                    self.screen = Screen::Login;
                }
                self.session = Session::Unauthenticated;
                false
            }
        }
    }

    /// Clears all scan state and redirects to the sign-in screen. In-flight
    /// responses are not cancelled; their results are discarded on arrival
    /// because the session is no longer authenticated.
    pub fn sign_out(&mut self) {
        info!("Operator signed out.");
        self.phase = ScanPhase::Idle;
        self.report = None;
        self.error = None;
        self.history.clear();
        self.history_error = None;
        self.export = ExportStatus::Idle;
        self.apply_session(Session::Unauthenticated);
    }

    // --- Scan dispatch ---

    /// Validates the active mode's form and admits a dispatch.
    ///
    /// Returns the request to send, or `None` when nothing may go out: a
    /// scan already in flight (silent no-op, existing state untouched) or a
    /// validation failure (error surfaced inline, nothing dispatched).
    pub fn submit(&mut self) -> Option<ScanRequest> {
        if self.is_scanning() {
            debug!("Submit ignored; a scan is already in flight.");
            return None;
        }
        match build_request(self.mode, &self.form) {
            Ok(request) => {
                self.phase = ScanPhase::Scanning;
                self.error = None;
                info!(mode = %self.mode, "Dispatching scan.");
                Some(request)
            }
            Err(e) => {
                warn!(mode = %self.mode, error = %e, "Validation failed; nothing dispatched.");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Consumes a scan outcome. Success replaces the held report wholesale
    /// and returns `true` to request one history refresh; failure surfaces
    /// the message and leaves the previous report untouched. Results that
    /// arrive after sign-out are discarded.
    pub fn finish_scan(&mut self, outcome: Result<ScanReport, String>) -> bool {
        if !self.session.is_authenticated() {
            debug!("Discarding scan result that arrived after sign-out.");
            return false;
        }
        self.phase = ScanPhase::Idle;
        match outcome {
            Ok(report) => {
                info!(
                    filename = %report.filename,
                    leaks = report.total_leaks,
                    risk = %report.risk_score,
                    "Scan finished."
                );
                self.error = None;
                self.report = Some(report);
                self.report_scroll = 0;
                true
            }
            Err(message) => {
                warn!(error = %message, "Scan failed; keeping the previous report.");
                self.error = Some(message);
                false
            }
        }
    }

    // --- History feed ---

    /// Replaces the held history with a fetched sequence, or surfaces the
    /// fetch error beside the table. Never touches the report or session.
    pub fn apply_history(&mut self, outcome: Result<Vec<HistoryItem>, String>) {
        if !self.session.is_authenticated() {
            debug!("Discarding history response that arrived after sign-out.");
            return;
        }
        match outcome {
            Ok(items) => {
                debug!(count = items.len(), "History replaced.");
                self.history = items;
                self.history_error = None;
            }
            Err(message) => {
                warn!(error = %message, "History fetch failed.");
                self.history_error = Some(message);
            }
        }
    }

    // --- Export ---

    /// Admits a PDF export for the held report. `None` when no report is
    /// held or an export is already running; neither case produces any
    /// network or save side effect.
    pub fn start_export(&mut self) -> Option<ExportJob> {
        if matches!(self.export, ExportStatus::Exporting) {
            debug!("Export ignored; one is already running.");
            return None;
        }
        let report = self.report.as_ref()?;
        self.export = ExportStatus::Exporting;
        info!(filename = %report.filename, "Starting export.");
        Some(ExportJob {
            filename: report.filename.clone(),
            findings: report.details.clone(),
        })
    }

    pub fn finish_export(&mut self, outcome: Result<PathBuf, String>) {
        self.export = match outcome {
            Ok(path) => {
                info!(path = %path.display(), "Report exported.");
                ExportStatus::Saved(path)
            }
            Err(message) => {
                warn!(error = %message, "Export failed.");
                ExportStatus::Failed(message)
            }
        };
    }

    // --- Mode selection and field editing ---

    /// Switches the active scan mode. Field values entered for other modes
    /// are preserved verbatim.
    pub fn select_mode(&mut self, mode: ScanMode) {
        if self.mode != mode {
            debug!(mode = %mode, "Scan mode selected.");
            self.mode = mode;
            self.focus = 0;
        }
    }

    pub fn next_mode(&mut self) {
        self.select_mode(cycle(self.mode, 1));
    }

    pub fn prev_mode(&mut self) {
        self.select_mode(cycle(self.mode, -1));
    }

    /// Number of editable fields for the active mode.
    pub fn field_count(&self) -> usize {
        match self.mode {
            ScanMode::File | ScanMode::Database => 1,
            ScanMode::CloudBucket => 4,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.field_count() - 1) % self.field_count();
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.mode {
            ScanMode::File => &mut self.form.file_path,
            ScanMode::Database => &mut self.form.connection_string,
            ScanMode::CloudBucket => match self.focus {
                0 => &mut self.form.access_key,
                1 => &mut self.form.secret_key,
                2 => &mut self.form.bucket_name,
                _ => &mut self.form.region,
            },
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.active_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.active_field_mut().pop();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle(mode: ScanMode, step: isize) -> ScanMode {
    let modes: Vec<ScanMode> = ScanMode::iter().collect();
    let index = modes.iter().position(|m| *m == mode).unwrap_or(0) as isize;
    let next = (index + step).rem_euclid(modes.len() as isize) as usize;
    modes[next]
}
