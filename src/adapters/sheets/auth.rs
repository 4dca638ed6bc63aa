use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator, ServiceAccountKey};
use google_sheets4::{hyper, hyper_rustls};

use crate::ports::DonationSourceError;

use super::http_client::HttpsClient;

/// Builds a service account authenticator over the shared hyper client.
/// A bad key (or an unreachable token endpoint) is reported, not
/// panicked: the request still has to end in a renderable summary.
pub async fn authorize(
    key: ServiceAccountKey,
    client: HttpsClient,
) -> error_stack::Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    DonationSourceError,
> {
    oauth2::ServiceAccountAuthenticator::with_client(key, client)
        .build()
        .await
        .change_context(DonationSourceError::AuthRejected)
}
