use google_sheets4::oauth2::ServiceAccountKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DonationSourceError {
    #[error("could not build the https client")]
    ClientSetup,
    #[error("authorization against the sheets service failed")]
    AuthRejected,
    #[error("could not search for spreadsheet '{0}'")]
    LookupFailed(String),
    #[error("spreadsheet '{0}' not found")]
    DocumentNotFound(String),
    #[error("failed to read the donation column")]
    ReadFailed,
    #[error("fetch timed out after {0} seconds")]
    TimedOut(u64),
}

/// Read-through access to the external sheet: authorize with the given
/// key and return the raw text cells of the donation column, header
/// excluded, in sheet order. The key is consumed; nothing is retained
/// between calls.
#[async_trait::async_trait]
pub trait DonationSource: Send + Sync {
    async fn fetch_raw_values(
        &self,
        key: ServiceAccountKey,
    ) -> error_stack::Result<Vec<String>, DonationSourceError>;
}
