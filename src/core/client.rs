// src/core/client.rs

use std::path::Path;

use reqwest::multipart;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::core::errors::ApiError;
use crate::core::models::{HistoryItem, LeakDetail, ScanReport, ScanRequest};

/// Shape of the structured error body the scan service attaches to
/// non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the remote sensitive-data-detection service.
///
/// One instance is shared by every dispatch; it holds no per-scan state.
/// Timeouts, if any, belong to the transport configuration here, never to
/// the orchestrator.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("DpdpShieldConsole/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request variant to its endpoint and normalizes the response.
    ///
    /// Exactly one endpoint is hit per variant: multipart upload for a file
    /// scan, JSON bodies for database and bucket scans.
    pub async fn dispatch(&self, request: ScanRequest) -> Result<ScanReport, ApiError> {
        match request {
            ScanRequest::File { path } => self.scan_file(&path).await,
            ScanRequest::Database { connection_string } => {
                self.scan_database(&connection_string).await
            }
            ScanRequest::CloudBucket {
                access_key,
                secret_key,
                bucket_name,
                region,
            } => {
                self.scan_s3(&access_key, &secret_key, &bucket_name, &region)
                    .await
            }
        }
    }

    /// Uploads a local file for scanning via `POST /scan-file/`.
    pub async fn scan_file(&self, path: &Path) -> Result<ScanReport, ApiError> {
        info!(path = %path.display(), "Uploading file for scan.");
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
            .to_string();

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/scan-file/"))
            .multipart(form)
            .send()
            .await?;
        read_report(response).await
    }

    /// Scans a live database via `POST /scan-database/`.
    pub async fn scan_database(&self, connection_string: &str) -> Result<ScanReport, ApiError> {
        info!("Requesting database scan.");
        let response = self
            .http
            .post(self.url("/scan-database/"))
            .json(&json!({ "connection_string": connection_string }))
            .send()
            .await?;
        read_report(response).await
    }

    /// Scans a cloud bucket via `POST /scan-s3/`.
    pub async fn scan_s3(
        &self,
        access_key: &str,
        secret_key: &str,
        bucket_name: &str,
        region: &str,
    ) -> Result<ScanReport, ApiError> {
        info!(bucket = bucket_name, region, "Requesting S3 bucket scan.");
        let response = self
            .http
            .post(self.url("/scan-s3/"))
            .json(&json!({
                "access_key": access_key,
                "secret_key": secret_key,
                "bucket_name": bucket_name,
                "region": region,
            }))
            .send()
            .await?;
        read_report(response).await
    }

    /// Fetches the full audit log via `GET /history/`. The caller replaces
    /// its held sequence wholesale with the result.
    pub async fn history(&self) -> Result<Vec<HistoryItem>, ApiError> {
        debug!("Fetching scan history.");
        let response = self.http.get(self.url("/history/")).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Requests the rendered audit certificate via `POST /generate-pdf/` and
    /// returns the raw PDF bytes.
    pub async fn generate_pdf(
        &self,
        filename: &str,
        findings: &[LeakDetail],
    ) -> Result<Vec<u8>, ApiError> {
        info!(filename, "Requesting PDF export.");
        let response = self
            .http
            .post(self.url("/generate-pdf/"))
            .json(&json!({ "filename": filename, "findings": findings }))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Maps non-success responses to `ApiError::Service`, preferring the
/// service's `detail` message over the generic status fallback.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(ApiError::Service(body.detail)),
        Err(_) => Err(ApiError::Service(format!(
            "Scan service returned {}",
            status
        ))),
    }
}

async fn read_report(response: reqwest::Response) -> Result<ScanReport, ApiError> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}
