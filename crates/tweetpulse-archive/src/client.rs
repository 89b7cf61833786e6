//! S3 `PutObject` client with path-style addressing.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode, Url};

use crate::credentials::AwsCredentials;
use crate::error::ArchiveError;
use crate::sigv4::{sha256_hex, sign_put, SigningInput};

/// SigV4 canonical-URI encoding: unreserved characters and the path
/// separator stay literal, everything else is percent-encoded.
const URI_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Object-store client for uploading the report file.
///
/// Use [`S3Client::new`] for the regional AWS endpoint or
/// [`S3Client::with_endpoint`] for S3-compatible stores and mock servers.
pub struct S3Client {
    client: Client,
    credentials: AwsCredentials,
    region: String,
    endpoint: Url,
}

impl S3Client {
    /// Creates a client for the regional AWS endpoint
    /// (`https://s3.{region}.amazonaws.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: AwsCredentials,
        region: &str,
        timeout_secs: u64,
    ) -> Result<Self, ArchiveError> {
        let endpoint = format!("https://s3.{region}.amazonaws.com");
        Self::with_endpoint(credentials, region, timeout_secs, &endpoint)
    }

    /// Creates a client with an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidEndpoint`] if `endpoint` does not
    /// parse or has no host, or [`ArchiveError::Http`] if the HTTP client
    /// cannot be constructed.
    pub fn with_endpoint(
        credentials: AwsCredentials,
        region: &str,
        timeout_secs: u64,
        endpoint: &str,
    ) -> Result<Self, ArchiveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("tweetpulse/0.1 (report-archive)")
            .build()?;

        let normalised = format!("{}/", endpoint.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ArchiveError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.host_str().is_none() {
            return Err(ArchiveError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: "endpoint has no host".to_string(),
            });
        }

        Ok(Self {
            client,
            credentials,
            region: region.to_string(),
            endpoint: parsed,
        })
    }

    /// Uploads the file at `path` to `bucket` under `key`.
    ///
    /// Reads the whole file into memory (reports are small), signs the
    /// request with SigV4, and issues a single `PUT`. No retries; failure
    /// leaves the already-written local file untouched.
    ///
    /// # Errors
    ///
    /// - [`ArchiveError::Io`] — the local file cannot be read.
    /// - [`ArchiveError::NotFound`] — the bucket does not exist (HTTP 404).
    /// - [`ArchiveError::Permission`] — credentials rejected (HTTP 403).
    /// - [`ArchiveError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ArchiveError::Http`] — network or TLS failure.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
    ) -> Result<(), ArchiveError> {
        let body = tokio::fs::read(path).await?;
        let payload_hash = sha256_hex(&body);

        let canonical_uri = format!(
            "/{}/{}",
            utf8_percent_encode(bucket, URI_ENCODE),
            utf8_percent_encode(key.trim_start_matches('/'), URI_ENCODE)
        );
        let url = self.object_url(&canonical_uri)?;
        let host = host_header(&url);

        let signed = sign_put(&SigningInput {
            credentials: &self.credentials,
            region: &self.region,
            host: &host,
            canonical_uri: &canonical_uri,
            payload_hash: &payload_hash,
            timestamp: Utc::now(),
        });

        let mut request = self
            .client
            .put(url.clone())
            .header("authorization", &signed.authorization)
            .header("x-amz-date", &signed.amz_date)
            .header("x-amz-content-sha256", &payload_hash);
        if let Some(token) = &self.credentials.session_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request.body(body).send().await?;
        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Err(ArchiveError::NotFound {
                bucket: bucket.to_string(),
            }),
            StatusCode::FORBIDDEN => Err(ArchiveError::Permission {
                bucket: bucket.to_string(),
            }),
            s if !s.is_success() => Err(ArchiveError::UnexpectedStatus {
                status: s.as_u16(),
                url: url.to_string(),
            }),
            _ => {
                tracing::info!(bucket, key, "report uploaded");
                Ok(())
            }
        }
    }

    /// Joins the already-encoded canonical URI onto the endpoint. Built from
    /// the raw string so the signed path and the wire path are identical
    /// bytes.
    fn object_url(&self, canonical_uri: &str) -> Result<Url, ArchiveError> {
        let raw = format!(
            "{}{}",
            self.endpoint.as_str().trim_end_matches('/'),
            canonical_uri
        );
        Url::parse(&raw).map_err(|e| ArchiveError::InvalidEndpoint {
            endpoint: raw,
            reason: e.to_string(),
        })
    }
}

/// Host header value as it must appear in the canonical headers: hostname
/// plus port when the port is non-default.
fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}
