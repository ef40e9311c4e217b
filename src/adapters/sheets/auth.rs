use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use google_sheets4::{hyper, hyper_rustls};

use super::spreadsheet_client::SpreadsheetClientError;
use crate::adapters::config::accounting_config::AccountingConfig;

/// Builds a service-account authenticator from the configured key file.
/// A missing or malformed key file is an error here, not a panic: connect
/// failures must surface as ordinary failure results.
pub async fn auth(
    config: &AccountingConfig,
    client: hyper::Client<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
) -> error_stack::Result<
    Authenticator<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
    SpreadsheetClientError,
> {
    let credentials_path = config.credentials_file.as_ref();
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(credentials_path)
        .await
        .change_context(SpreadsheetClientError::FailedToReadCredentials)
        .attach_printable_lazy(|| {
            format!("Could not read service account key at '{}'", credentials_path)
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client.clone())
        .build()
        .await
        .change_context(SpreadsheetClientError::FailedToBuildAuthenticator)
}
