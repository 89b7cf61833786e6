//! Static credentials loaded from the conventional AWS env vars.

use crate::error::ArchiveError;

/// Access key pair plus optional session token for temporary credentials.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Load credentials from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`,
    /// and (optionally) `AWS_SESSION_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::MissingCredentials`] listing every missing
    /// required variable.
    pub fn from_env() -> Result<Self, ArchiveError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build credentials using the provided lookup function, decoupled from
    /// the process environment for testing.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ArchiveError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key_id = lookup("AWS_ACCESS_KEY_ID");
        let secret_access_key = lookup("AWS_SECRET_ACCESS_KEY");
        let session_token = lookup("AWS_SESSION_TOKEN");

        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Self {
                access_key_id,
                secret_access_key,
                session_token,
            }),
            (access_key_id, secret_access_key) => {
                let mut missing = Vec::new();
                if access_key_id.is_none() {
                    missing.push("AWS_ACCESS_KEY_ID");
                }
                if secret_access_key.is_none() {
                    missing.push("AWS_SECRET_ACCESS_KEY");
                }
                Err(ArchiveError::MissingCredentials(missing.join(", ")))
            }
        }
    }
}
