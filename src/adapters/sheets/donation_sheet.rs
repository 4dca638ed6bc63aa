use std::time::Duration;

use error_stack::{report, ResultExt};
use google_drive3::DriveHub;
use google_sheets4::oauth2::ServiceAccountKey;
use google_sheets4::{hyper, hyper_rustls, Sheets};
use tracing::instrument;

use crate::config::SpreadsheetConfig;
use crate::ports::{DonationSource, DonationSourceError};

use super::flatten_values::FlattenValues;
use super::{auth, http_client};

/// Column A of the first sheet, header row excluded.
const DONATION_RANGE: &str = "A2:A";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

type Connector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

/// Fetches the donation column of a spreadsheet located by its Drive
/// document title (the way gspread's `open` works). Connections and
/// tokens are built per call; nothing is shared between requests.
pub struct DonationSheet {
    config: SpreadsheetConfig,
}

impl DonationSheet {
    pub fn new(config: SpreadsheetConfig) -> Self {
        DonationSheet { config }
    }

    async fn fetch_inner(
        &self,
        key: ServiceAccountKey,
    ) -> error_stack::Result<Vec<String>, DonationSourceError> {
        let client = http_client::http_client()?;
        let auth = auth::authorize(key, client.clone()).await?;

        let drive = DriveHub::new(client.clone(), auth.clone());
        let spreadsheet_id = self.locate_document(&drive).await?;

        let sheets = Sheets::new(client, auth);
        let response = sheets
            .spreadsheets()
            .values_get(&spreadsheet_id, DONATION_RANGE)
            .add_scope(google_sheets4::api::Scope::Spreadsheet)
            .doit()
            .await
            .change_context(DonationSourceError::ReadFailed)
            .attach_printable_lazy(|| {
                format!("range {DONATION_RANGE} of spreadsheet {spreadsheet_id}")
            })?;

        // An entirely empty column comes back with no values at all.
        Ok(response.1.values.unwrap_or_default().flatten_values())
    }

    async fn locate_document(
        &self,
        drive: &DriveHub<Connector>,
    ) -> error_stack::Result<String, DonationSourceError> {
        let name = self.config.document_name.replace('\'', "\\'");
        let query = format!(
            "name = '{name}' and mimeType = '{SPREADSHEET_MIME_TYPE}' and trashed = false"
        );

        let (_, listing) = drive
            .files()
            .list()
            .q(&query)
            .add_scope(google_drive3::api::Scope::Full)
            .doit()
            .await
            .change_context_lazy(|| {
                DonationSourceError::LookupFailed(self.config.document_name.to_string())
            })?;

        listing
            .files
            .unwrap_or_default()
            .into_iter()
            .find_map(|file| file.id)
            .ok_or_else(|| {
                report!(DonationSourceError::DocumentNotFound(
                    self.config.document_name.to_string()
                ))
            })
    }
}

#[async_trait::async_trait]
impl DonationSource for DonationSheet {
    #[instrument(skip(self, key), fields(document = %self.config.document_name))]
    async fn fetch_raw_values(
        &self,
        key: ServiceAccountKey,
    ) -> error_stack::Result<Vec<String>, DonationSourceError> {
        // The remote call is the only unbounded operation in the
        // request path; cap it.
        with_deadline(self.config.fetch_timeout_secs, self.fetch_inner(key)).await
    }
}

async fn with_deadline<T>(
    timeout_secs: u64,
    fetch: impl std::future::Future<Output = error_stack::Result<T, DonationSourceError>>,
) -> error_stack::Result<T, DonationSourceError> {
    match tokio::time::timeout(Duration::from_secs(timeout_secs), fetch).await {
        Ok(result) => result,
        Err(_elapsed) => Err(report!(DonationSourceError::TimedOut(timeout_secs))),
    }
}
