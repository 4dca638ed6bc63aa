use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use google_sheets4::oauth2::ServiceAccountKey;

use crate::domain::CredentialSource;
use crate::ports::{CredentialError, CredentialProvider};

use super::parse_service_account_json;

/// Reads the service account key from a local JSON file. Second link of
/// the fallback chain, tried only when the environment variable is
/// absent.
pub struct FileCredentialProvider {
    path: PathBuf,
}

impl FileCredentialProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileCredentialProvider {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CredentialProvider for FileCredentialProvider {
    fn source(&self) -> CredentialSource {
        CredentialSource::LocalFile
    }

    fn provide(&self) -> error_stack::Result<Option<ServiceAccountKey>, CredentialError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)
            .change_context(CredentialError::Unreadable(self.source()))
            .attach_printable_lazy(|| format!("path: {}", self.path.display()))?;
        parse_service_account_json(&json, self.source()).map(Some)
    }
}
