//! Object-store uploader for the produced report file.
//!
//! Speaks the S3 `PutObject` REST operation directly over `reqwest`,
//! signing each request with AWS Signature V4 (HMAC-SHA256 over `sha2` +
//! `hmac`). Path-style addressing keeps the client compatible with
//! S3-compatible stores and with mock servers in tests.

pub mod client;
pub mod credentials;
pub mod error;

mod sigv4;

pub use client::S3Client;
pub use credentials::AwsCredentials;
pub use error::ArchiveError;
