use google_sheets4::oauth2::ServiceAccountKey;
use thiserror::Error;

use crate::domain::CredentialSource;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential material from {0} is not a valid service account key")]
    Malformed(CredentialSource),
    #[error("could not read credentials from {0}")]
    Unreadable(CredentialSource),
}

/// One step of the credential fallback chain: either produce a key,
/// report that this source is absent (`Ok(None)`), or fail because the
/// source exists but its contents are unusable.
pub trait CredentialProvider: Send + Sync {
    fn source(&self) -> CredentialSource;

    fn provide(&self) -> error_stack::Result<Option<ServiceAccountKey>, CredentialError>;
}
