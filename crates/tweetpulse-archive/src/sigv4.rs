//! AWS Signature Version 4 request signing for S3 `PutObject`.
//!
//! Implements the canonical-request / string-to-sign / signing-key chain for
//! the fixed header set this client sends: `host`, `x-amz-content-sha256`,
//! `x-amz-date`, and (for temporary credentials) `x-amz-security-token`.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::credentials::AwsCredentials;

type HmacSha256 = Hmac<Sha256>;

const SERVICE: &str = "s3";
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Everything needed to sign one request. `canonical_uri` must already be
/// percent-encoded (the exact bytes sent on the wire).
pub(crate) struct SigningInput<'a> {
    pub credentials: &'a AwsCredentials,
    pub region: &'a str,
    pub host: &'a str,
    pub canonical_uri: &'a str,
    pub payload_hash: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// The signed header values to attach to the outgoing request.
pub(crate) struct SignedRequest {
    pub authorization: String,
    pub amz_date: String,
}

/// Lowercase hex encoding of a byte slice.
pub(crate) fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hex-encoded SHA-256 digest.
pub(crate) fn sha256_hex(data: &[u8]) -> String {
    hex(&Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC-SHA256 accepts keys of any length; new_from_slice cannot fail.
    let mut mac = HmacSha256::new_from_slice(key)
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Derive the per-day signing key: chained HMACs over date, region, service.
pub(crate) fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    let k_date = hmac_sha256(format!("AWS4{secret}").as_bytes(), date.as_bytes());
    let k_region = hmac_sha256(&k_date, region.as_bytes());
    let k_service = hmac_sha256(&k_region, service.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

/// Sign a `PUT` request, producing the `Authorization` header value and the
/// matching `x-amz-date` stamp.
pub(crate) fn sign_put(input: &SigningInput<'_>) -> SignedRequest {
    let amz_date = input.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date = input.timestamp.format("%Y%m%d").to_string();

    // Canonical headers must be sorted by name; the security token sorts
    // last in this fixed set.
    let mut canonical_headers = format!(
        "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
        input.host, input.payload_hash, amz_date
    );
    let mut signed_headers = String::from("host;x-amz-content-sha256;x-amz-date");
    if let Some(token) = &input.credentials.session_token {
        canonical_headers.push_str(&format!("x-amz-security-token:{token}\n"));
        signed_headers.push_str(";x-amz-security-token");
    }

    let canonical_request = format!(
        "PUT\n{}\n\n{}\n{}\n{}",
        input.canonical_uri, canonical_headers, signed_headers, input.payload_hash
    );

    let scope = format!("{date}/{}/{SERVICE}/aws4_request", input.region);
    let string_to_sign = format!(
        "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
        sha256_hex(canonical_request.as_bytes())
    );

    let key = signing_key(
        &input.credentials.secret_access_key,
        &date,
        input.region,
        SERVICE,
    );
    let signature = hex(&hmac_sha256(&key, string_to_sign.as_bytes()));

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        input.credentials.access_key_id
    );

    SignedRequest {
        authorization,
        amz_date,
    }
}
