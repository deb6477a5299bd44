// tests/api_client_test.rs
//
// Exercises the ApiClient against a mock scan service: one endpoint per
// request variant, report normalization, and the structured-detail error
// contract.

use std::io::Write;

use dpdp_shield_console::core::client::ApiClient;
use dpdp_shield_console::core::errors::ApiError;
use dpdp_shield_console::core::models::{LeakLocation, ScanRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn report_body() -> serde_json::Value {
    json!({
        "filename": "a.csv",
        "total_leaks": 3,
        "risk_score": "HIGH",
        "compliance_status": "NON_COMPLIANT",
        "details": [
            {"type": "AADHAAR", "value_masked": "XXXX-XXXX-1234", "line": 12},
            {"type": "PAN", "value_masked": "ABCDE****F", "line": 40},
            {"type": "EMAIL", "value_masked": "a***@b.com", "line": "97"}
        ]
    })
}

#[tokio::test]
async fn scan_database_posts_connection_string_and_parses_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-database/"))
        .and(body_json(json!({"connection_string": "sqlite:///vulnerable.db"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let report = client
        .scan_database("sqlite:///vulnerable.db")
        .await
        .unwrap();

    assert_eq!(report.filename, "a.csv");
    assert_eq!(report.total_leaks, 3);
    assert_eq!(report.risk_score, "HIGH");
    assert_eq!(report.details.len(), 3);
    assert_eq!(report.details[0].location, LeakLocation::Line(12));
}

#[tokio::test]
async fn scan_file_uploads_multipart_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-file/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,email\nalice,alice@example.com").unwrap();

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let report = client
        .dispatch(ScanRequest::File {
            path: file.path().to_path_buf(),
        })
        .await
        .unwrap();

    assert_eq!(report.total_leaks, 3);
}

#[tokio::test]
async fn scan_file_with_missing_file_never_reaches_the_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-file/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let outcome = client
        .dispatch(ScanRequest::File {
            path: "/nonexistent/customers.csv".into(),
        })
        .await;

    assert!(matches!(outcome, Err(ApiError::File(_))));
}

#[tokio::test]
async fn scan_s3_posts_all_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-s3/"))
        .and(body_json(json!({
            "access_key": "AKIA123",
            "secret_key": "shh",
            "bucket_name": "payroll",
            "region": "us-east-1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let report = client
        .dispatch(ScanRequest::CloudBucket {
            access_key: "AKIA123".into(),
            secret_key: "shh".into(),
            bucket_name: "payroll".into(),
            region: "us-east-1".into(),
        })
        .await
        .unwrap();

    assert_eq!(report.risk_score, "HIGH");
}

#[tokio::test]
async fn service_detail_becomes_the_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-file/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Invalid file type. Only CSV, SQL, or TXT allowed."
        })))
        .mount(&mock_server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "binary junk").unwrap();

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let error = client.scan_file(file.path()).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Invalid file type. Only CSV, SQL, or TXT allowed."
    );
}

#[tokio::test]
async fn missing_detail_falls_back_to_a_generic_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/scan-database/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let error = client.scan_database("sqlite:///x.db").await.unwrap_err();

    assert!(matches!(error, ApiError::Service(_)));
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn history_is_fetched_as_an_ordered_sequence() {
    let mock_server = MockServer::start().await;

    let body = json!([
        {"filename": "a.csv", "date": "2026-08-05 10:00:00", "leaks": 3, "risk": "HIGH"},
        {"filename": "Live Database Scan", "date": "2026-08-04 18:30:00", "leaks": 0, "risk": "LOW"}
    ]);
    Mock::given(method("GET"))
        .and(path("/history/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let history = client.history().await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].filename, "a.csv");
    assert_eq!(history[1].leaks, 0);

    // A second fetch of the unchanged list yields the same sequence.
    let again = client.history().await.unwrap();
    assert_eq!(history, again);
}

#[tokio::test]
async fn generate_pdf_returns_the_raw_artifact() {
    let mock_server = MockServer::start().await;

    let pdf = b"%PDF-1.4 fake".to_vec();
    Mock::given(method("POST"))
        .and(path("/generate-pdf/"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf.clone()))
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri()).unwrap();
    let bytes = client.generate_pdf("a.csv", &[]).await.unwrap();

    assert_eq!(bytes, pdf);
}
