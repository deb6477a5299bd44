// src/core/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use strum::{Display, EnumIter};

// --- Session ---

/// The operator identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Authentication state as resolved by the credential collaborator.
///
/// The orchestrator never inspects secrets; it only reacts to this value.
/// `Pending` is the startup state while the persisted session is being
/// resolved, and gates all rendering behind a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Pending,
    Authenticated(User),
    Unauthenticated,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

// --- Scan targets ---

/// The target vector selected for a compliance scan. Exactly one is active
/// at a time; the labels match the dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ScanMode {
    #[strum(serialize = "File Scan")]
    File,
    #[strum(serialize = "Database Scan")]
    Database,
    #[strum(serialize = "Cloud S3")]
    CloudBucket,
}

/// A validated scan request, ready for dispatch. Each variant maps to
/// exactly one service endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanRequest {
    File {
        path: PathBuf,
    },
    Database {
        connection_string: String,
    },
    CloudBucket {
        access_key: String,
        secret_key: String,
        bucket_name: String,
        region: String,
    },
}

// --- Report ---

/// Where a leak was found. The service reports file scans by line number and
/// database or bucket scans by a textual label, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeakLocation {
    Line(u64),
    Label(String),
}

impl fmt::Display for LeakLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeakLocation::Line(n) => write!(f, "{}", n),
            LeakLocation::Label(s) => write!(f, "{}", s),
        }
    }
}

/// A single detected instance of sensitive data, as asserted by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub value_masked: String,
    #[serde(rename = "line")]
    pub location: LeakLocation,
}

/// The normalized result of one scan. Risk score and leak count are taken
/// from the service as-is and never recomputed or reconciled client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub filename: String,
    pub total_leaks: u64,
    pub risk_score: String,
    pub details: Vec<LeakDetail>,
}

/// Compliance verdict derived from the leak count alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Compliance {
    #[strum(serialize = "Compliant")]
    Compliant,
    #[strum(serialize = "Non-Compliant")]
    NonCompliant,
}

impl ScanReport {
    /// `Non-Compliant` iff the service reported at least one leak.
    pub fn compliance(&self) -> Compliance {
        if self.total_leaks > 0 {
            Compliance::NonCompliant
        } else {
            Compliance::Compliant
        }
    }
}

// --- History ---

/// One row of the server-maintained audit log. Field names follow the wire
/// format of `GET /history/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub filename: String,
    pub date: String,
    pub leaks: u64,
    pub risk: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_with_leaks_is_non_compliant() {
        let report = ScanReport {
            filename: "a.csv".into(),
            total_leaks: 3,
            risk_score: "HIGH".into(),
            details: Vec::new(),
        };
        assert_eq!(report.compliance(), Compliance::NonCompliant);
    }

    #[test]
    fn report_without_leaks_is_compliant() {
        let report = ScanReport {
            filename: "clean.txt".into(),
            total_leaks: 0,
            risk_score: "LOW".into(),
            details: Vec::new(),
        };
        assert_eq!(report.compliance(), Compliance::Compliant);
    }

    #[test]
    fn leak_location_accepts_numbers_and_labels() {
        let numeric: LeakDetail =
            serde_json::from_str(r#"{"type":"AADHAAR","value_masked":"XXXX-1234","line":42}"#)
                .unwrap();
        assert_eq!(numeric.location, LeakLocation::Line(42));

        let labeled: LeakDetail = serde_json::from_str(
            r#"{"type":"EMAIL","value_masked":"a***@b.com","line":"table: users"}"#,
        )
        .unwrap();
        assert_eq!(labeled.location, LeakLocation::Label("table: users".into()));
    }

    #[test]
    fn report_parses_service_payload_with_extra_fields() {
        // The service also sends `compliance_status`; the client derives its
        // own verdict and ignores the extra field.
        let raw = r#"{
            "filename": "dump.sql",
            "total_leaks": 1,
            "risk_score": "HIGH",
            "compliance_status": "NON_COMPLIANT",
            "details": [
                {"type": "PAN", "value_masked": "ABCDE****F", "line": "7"}
            ]
        }"#;
        let report: ScanReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.total_leaks, 1);
        assert_eq!(report.details.len(), 1);
        assert_eq!(report.compliance(), Compliance::NonCompliant);
    }
}
