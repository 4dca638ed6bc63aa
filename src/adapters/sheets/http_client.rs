use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use crate::ports::DonationSourceError;

pub type HttpsClient = hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// Builds the shared TLS client. Loading the system root store can
/// fail, and that failure has to end in an error summary like every
/// other infrastructure fault, so it is reported rather than panicked.
pub fn http_client() -> error_stack::Result<HttpsClient, DonationSourceError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(DonationSourceError::ClientSetup)?
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();
    Ok(hyper::Client::builder().build(connector))
}
