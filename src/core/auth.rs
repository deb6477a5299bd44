// src/core/auth.rs

use std::path::PathBuf;

use lazy_static::lazy_static;
use tracing::{info, warn};

use crate::core::models::{Session, User};
use crate::logging::{get_data_dir, PROJECT_NAME};

lazy_static! {
    pub static ref ADMIN_KEY_ENV: String = format!("{}_ADMIN_KEY", *PROJECT_NAME);
}

const SESSION_FILE: &str = "session.json";

/// Credential collaborator for the console.
///
/// Sign-in compares the operator's secret against the configured admin key
/// and persists a session marker so later launches resolve straight to an
/// authenticated session. The orchestrator itself only ever sees the
/// resulting [`Session`] value.
#[derive(Debug)]
pub struct CredentialStore {
    admin_key: Option<String>,
    session_file: PathBuf,
}

impl CredentialStore {
    pub fn new() -> Self {
        let admin_key = std::env::var(ADMIN_KEY_ENV.as_str()).ok();
        if admin_key.is_none() {
            warn!(
                "{} is not set; sign-in will be denied until it is configured.",
                *ADMIN_KEY_ENV
            );
        }
        Self {
            admin_key,
            session_file: get_data_dir().join(SESSION_FILE),
        }
    }

    /// Resolves the persisted session, if any. Called once at startup while
    /// the UI shows the pending placeholder.
    pub fn resolve(&self) -> Session {
        match std::fs::read_to_string(&self.session_file) {
            Ok(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!(user = %user.name, "Restored persisted session.");
                    Session::Authenticated(user)
                }
                Err(e) => {
                    warn!(error = %e, "Session marker was unreadable; treating as signed out.");
                    Session::Unauthenticated
                }
            },
            Err(_) => Session::Unauthenticated,
        }
    }

    /// Checks the secret and returns the signed-in user on a match, `None`
    /// otherwise. A successful sign-in persists the session marker.
    pub fn sign_in(&self, secret: &str) -> Option<User> {
        let expected = self.admin_key.as_deref()?;
        if secret != expected {
            info!("Sign-in attempt rejected.");
            return None;
        }
        let user = User {
            name: "Admin User".to_string(),
            email: "admin@dpdp.com".to_string(),
        };
        self.persist(&user);
        info!(user = %user.name, "Sign-in accepted.");
        Some(user)
    }

    /// Clears the persisted session.
    pub fn sign_out(&self) {
        if let Err(e) = std::fs::remove_file(&self.session_file) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, "Could not remove session marker.");
            }
        }
        info!("Signed out.");
    }

    fn persist(&self, user: &User) {
        if let Some(parent) = self.session_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.session_file, raw) {
                    warn!(error = %e, "Could not persist session marker.");
                }
            }
            Err(e) => warn!(error = %e, "Could not serialize session marker."),
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
