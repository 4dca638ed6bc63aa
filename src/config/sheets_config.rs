#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    /// Title of the spreadsheet document as it appears in Drive,
    /// e.g. "iftar". The first sheet of the document is read.
    pub document_name: Box<str>,
    /// Path of the local service account key file, tried after the
    /// environment variable.
    pub credentials_file: Box<str>,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_fetch_timeout_secs() -> u64 {
    10
}
