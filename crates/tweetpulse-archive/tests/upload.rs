//! Integration tests for `S3Client` using wiremock HTTP mocks.

use std::path::PathBuf;

use tweetpulse_archive::{ArchiveError, AwsCredentials, S3Client};
use wiremock::matchers::{body_string, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> AwsCredentials {
    AwsCredentials {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        session_token: None,
    }
}

fn test_client(endpoint: &str) -> S3Client {
    S3Client::with_endpoint(test_credentials(), "us-east-1", 30, endpoint)
        .expect("client construction should not fail")
}

/// Writes a small report fixture to a unique temp path.
fn fixture_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tweetpulse-archive-{}-{name}.csv",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("fixture write should succeed");
    path
}

#[tokio::test]
async fn put_object_sends_signed_put_with_file_body() {
    let server = MockServer::start().await;
    let contents = "id,author,text,polarity,label\n1,a,hi,0.000,neutral\n";
    let file = fixture_file("ok", contents);

    Mock::given(method("PUT"))
        .and(path("/archive/reports/run.csv"))
        .and(body_string(contents))
        .and(header_exists("authorization"))
        .and(header_exists("x-amz-date"))
        .and(header_exists("x-amz-content-sha256"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .put_object("archive", "reports/run.csv", &file)
        .await
        .expect("upload should succeed");

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn authorization_header_uses_sigv4_scheme() {
    let server = MockServer::start().await;
    let file = fixture_file("sigv4", "data");

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.put_object("bucket", "key.csv", &file).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let auth = requests[0]
        .headers
        .get("authorization")
        .expect("authorization header present")
        .to_str()
        .unwrap();
    assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(auth.contains("/us-east-1/s3/aws4_request"));
    assert!(auth.contains("SignedHeaders=host;x-amz-content-sha256;x-amz-date"));

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn missing_bucket_maps_to_not_found() {
    let server = MockServer::start().await;
    let file = fixture_file("404", "data");

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .put_object("missing-bucket", "key.csv", &file)
        .await
        .unwrap_err();
    match err {
        ArchiveError::NotFound { bucket } => assert_eq!(bucket, "missing-bucket"),
        other => panic!("expected NotFound, got {other:?}"),
    }

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn rejected_credentials_map_to_permission() {
    let server = MockServer::start().await;
    let file = fixture_file("403", "data");

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.put_object("bucket", "key.csv", &file).await.unwrap_err();
    assert!(
        matches!(err, ArchiveError::Permission { .. }),
        "expected Permission, got {err:?}"
    );

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn server_error_maps_to_unexpected_status() {
    let server = MockServer::start().await;
    let file = fixture_file("500", "data");

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.put_object("bucket", "key.csv", &file).await.unwrap_err();
    assert!(
        matches!(err, ArchiveError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus, got {err:?}"
    );

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn missing_local_file_is_an_io_error() {
    let server = MockServer::start().await;
    let client = test_client(&server.uri());
    let err = client
        .put_object("bucket", "key.csv", std::path::Path::new("/nonexistent/report.csv"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ArchiveError::Io(_)),
        "expected Io, got {err:?}"
    );
}

#[tokio::test]
async fn session_token_is_sent_when_configured() {
    let server = MockServer::start().await;
    let file = fixture_file("token", "data");

    Mock::given(method("PUT"))
        .and(header_exists("x-amz-security-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = AwsCredentials {
        session_token: Some("FwoGZXIvYXdzEXAMPLE".to_string()),
        ..test_credentials()
    };
    let client = S3Client::with_endpoint(credentials, "us-east-1", 30, &server.uri()).unwrap();
    client.put_object("bucket", "key.csv", &file).await.unwrap();

    std::fs::remove_file(&file).ok();
}
