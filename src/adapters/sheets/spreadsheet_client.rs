use error_stack::ResultExt;
use google_sheets4::{api::ValueRange, Sheets};
use std::fmt::Debug;
use thiserror::Error;
use tracing::instrument;

use crate::adapters::config::accounting_config::AccountingConfig;
use crate::domain::sheets::{
    a1_notation::ToA1Notation, cell_position::CellPosition, column::Column,
};

use super::{auth, http_client};

/// Authenticated handle to the accounting spreadsheet. One remote read or
/// write per method; no caching, no retries.
pub struct SpreadsheetClient {
    pub config: AccountingConfig,
    hub: Sheets<
        google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
    >,
}

impl Debug for SpreadsheetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpreadsheetClient {{ config: {:?} }}", self.config)
    }
}

#[derive(Error, Debug)]
pub enum SpreadsheetClientError {
    #[error("Failed to read service account credentials")]
    FailedToReadCredentials,
    #[error("Failed to build authenticator")]
    FailedToBuildAuthenticator,
    #[error("Failed to fetch spreadsheet metadata")]
    FailedToFetchMetadata,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
}

impl SpreadsheetClient {
    pub async fn connect(
        config: AccountingConfig,
    ) -> error_stack::Result<Self, SpreadsheetClientError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub: Sheets<
            google_sheets4::hyper_rustls::HttpsConnector<
                google_sheets4::hyper::client::HttpConnector,
            >,
        > = Sheets::new(client.clone(), auth);

        Ok(SpreadsheetClient { config, hub })
    }

    /// Titles of every tab in the spreadsheet.
    #[instrument]
    pub async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SpreadsheetClientError> {
        let response = self
            .hub
            .spreadsheets()
            .get(&self.config.spreadsheet_id)
            .doit()
            .await
            .change_context(SpreadsheetClientError::FailedToFetchMetadata)?;

        let titles = response
            .1
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|properties| properties.title))
            .collect();

        Ok(titles)
    }

    /// Number of occupied rows in a column. An absent values payload means
    /// the column is empty, not an error.
    #[instrument]
    pub async fn column_row_count(
        &self,
        sheet_name: &str,
        column: Column,
    ) -> error_stack::Result<usize, SpreadsheetClientError> {
        let range = column.to_a1_notation(Some(sheet_name));
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.config.spreadsheet_id, range.as_ref())
            .doit()
            .await
            .change_context(SpreadsheetClientError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        Ok(response.1.values.map(|rows| rows.len()).unwrap_or(0))
    }

    /// Writes a block of rows starting at `position`, values taken as raw
    /// input (never interpreted as formulas).
    #[instrument(skip(value_range))]
    pub async fn write_rows_at(
        &self,
        sheet_name: &str,
        position: CellPosition,
        value_range: ValueRange,
    ) -> error_stack::Result<(), SpreadsheetClientError> {
        let anchor = position.to_a1_notation(Some(sheet_name));
        self.hub
            .spreadsheets()
            .values_update(value_range, &self.config.spreadsheet_id, anchor.as_ref())
            .value_input_option("RAW")
            .doit()
            .await
            .map(|_| ())
            .change_context(SpreadsheetClientError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write to range {}", anchor))
    }
}
