// src/core/request.rs

use std::path::PathBuf;

use crate::core::errors::ValidationError;
use crate::core::models::{ScanMode, ScanRequest};

/// Form state for all three scan modes, held together at the top level.
///
/// Values entered for an inactive mode are preserved verbatim across mode
/// switches; only the active mode's fields are validated at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanForm {
    pub file_path: String,
    pub connection_string: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket_name: String,
    pub region: String,
}

impl Default for ScanForm {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            connection_string: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            bucket_name: String::new(),
            region: "us-east-1".to_string(),
        }
    }
}

/// Validates the active mode's required field and produces the matching
/// request variant.
///
/// Only the field the service cannot do without is checked client-side:
/// the file path, the connection string, or the access key. Secret key,
/// bucket name and region ride along unvalidated and any problem with them
/// comes back as a structured service error.
pub fn build_request(mode: ScanMode, form: &ScanForm) -> Result<ScanRequest, ValidationError> {
    match mode {
        ScanMode::File => {
            let path = form.file_path.trim();
            if path.is_empty() {
                return Err(ValidationError::MissingFile);
            }
            Ok(ScanRequest::File {
                path: PathBuf::from(path),
            })
        }
        ScanMode::Database => {
            let connection_string = form.connection_string.trim();
            if connection_string.is_empty() {
                return Err(ValidationError::MissingConnectionString);
            }
            Ok(ScanRequest::Database {
                connection_string: connection_string.to_string(),
            })
        }
        ScanMode::CloudBucket => {
            let access_key = form.access_key.trim();
            if access_key.is_empty() {
                return Err(ValidationError::MissingAccessKey);
            }
            Ok(ScanRequest::CloudBucket {
                access_key: access_key.to_string(),
                secret_key: form.secret_key.clone(),
                bucket_name: form.bucket_name.clone(),
                region: form.region.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mode_requires_a_path() {
        let form = ScanForm::default();
        assert_eq!(
            build_request(ScanMode::File, &form),
            Err(ValidationError::MissingFile)
        );

        let form = ScanForm {
            file_path: "  customers.csv  ".into(),
            ..ScanForm::default()
        };
        assert_eq!(
            build_request(ScanMode::File, &form),
            Ok(ScanRequest::File {
                path: PathBuf::from("customers.csv")
            })
        );
    }

    #[test]
    fn database_mode_requires_a_connection_string() {
        let form = ScanForm {
            // Whitespace-only counts as empty.
            connection_string: "   ".into(),
            ..ScanForm::default()
        };
        assert_eq!(
            build_request(ScanMode::Database, &form),
            Err(ValidationError::MissingConnectionString)
        );

        let form = ScanForm {
            connection_string: "sqlite:///vulnerable.db".into(),
            ..ScanForm::default()
        };
        assert_eq!(
            build_request(ScanMode::Database, &form),
            Ok(ScanRequest::Database {
                connection_string: "sqlite:///vulnerable.db".into()
            })
        );
    }

    #[test]
    fn cloud_mode_requires_only_the_access_key() {
        let form = ScanForm {
            secret_key: "shh".into(),
            bucket_name: "payroll".into(),
            ..ScanForm::default()
        };
        assert_eq!(
            build_request(ScanMode::CloudBucket, &form),
            Err(ValidationError::MissingAccessKey)
        );

        // Secret key and bucket name pass through even when empty.
        let form = ScanForm {
            access_key: "AKIA123".into(),
            ..ScanForm::default()
        };
        assert_eq!(
            build_request(ScanMode::CloudBucket, &form),
            Ok(ScanRequest::CloudBucket {
                access_key: "AKIA123".into(),
                secret_key: String::new(),
                bucket_name: String::new(),
                region: "us-east-1".into(),
            })
        );
    }

    #[test]
    fn region_defaults_to_us_east_1() {
        assert_eq!(ScanForm::default().region, "us-east-1");
    }
}
