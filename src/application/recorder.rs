use std::path::Path;

use chrono::{Local, NaiveDate};
use google_sheets4::api::ValueRange;
use serde_json::Value;

use crate::adapters::config::accounting_config::AccountingConfig;
use crate::adapters::sheets::spreadsheet_client::{SpreadsheetClient, SpreadsheetClientError};
use crate::adapters::sheets::value_range_factory::ValueRangeFactory;
use crate::domain::money::format_thousands;
use crate::domain::sheets::{cell_position::CellPosition, column::Column, row::Row};
use crate::domain::subscription::Subscription;

pub const MOVEMENT_DETAIL_PREFIX: &str = "Gasto recurrente";

/// Registers recurring subscription expenses in the accounting spreadsheet:
/// one row per subscription in the expenses sheet, one mirrored negative row
/// in the cash movements sheet. The two writes are independent best-effort
/// calls; a failure in either one is reported but never rolled back.
pub struct ExpenseRecorder {
    config: AccountingConfig,
}

impl ExpenseRecorder {
    pub fn new(config: AccountingConfig) -> Self {
        if !Path::new(config.credentials_file.as_ref()).exists() {
            tracing::warn!(
                "Credentials file '{}' does not exist",
                config.credentials_file
            );
        }
        ExpenseRecorder { config }
    }

    /// One fresh client per operation. Connection problems (missing or
    /// invalid key file, transport errors) are logged here and reported to
    /// callers as `None`.
    async fn connect(&self) -> Option<SpreadsheetClient> {
        match SpreadsheetClient::connect(self.config.clone()).await {
            Ok(client) => Some(client),
            Err(report) => {
                tracing::error!("Could not connect to Google Sheets: {:?}", report);
                None
            }
        }
    }

    /// Registers the subscriptions in both ledgers. Returns true only if
    /// both writes succeeded; an empty list is a no-op success.
    pub async fn register_expenses(&self, subscriptions: &[Subscription]) -> bool {
        if subscriptions.is_empty() {
            tracing::info!("No expenses to register");
            return true;
        }

        let expenses_ok = self.register_in_expenses_sheet(subscriptions).await;
        let movements_ok = self.register_in_movements_sheet(subscriptions).await;

        expenses_ok && movements_ok
    }

    pub async fn register_in_expenses_sheet(&self, subscriptions: &[Subscription]) -> bool {
        let Some(client) = self.connect().await else {
            return false;
        };

        let date = ledger_date(Local::now().date_naive());
        let rows = subscriptions
            .iter()
            .map(|subscription| expenses_row(subscription, &date))
            .collect();

        let sheet_name = self.config.expenses_sheet_name.clone();
        match append_rows(&client, &sheet_name, rows).await {
            Ok(count) => {
                tracing::info!("Registered {} expenses in sheet '{}'", count, sheet_name);
                true
            }
            Err(report) => {
                tracing::error!(
                    "Failed to register expenses in sheet '{}': {:?}",
                    sheet_name,
                    report
                );
                false
            }
        }
    }

    pub async fn register_in_movements_sheet(&self, subscriptions: &[Subscription]) -> bool {
        let Some(client) = self.connect().await else {
            return false;
        };

        let date = ledger_date(Local::now().date_naive());
        let rows = subscriptions
            .iter()
            .map(|subscription| movements_row(subscription, &date))
            .collect();

        let sheet_name = self.config.movements_sheet_name.clone();
        match append_rows(&client, &sheet_name, rows).await {
            Ok(count) => {
                tracing::info!("Registered {} movements in sheet '{}'", count, sheet_name);
                true
            }
            Err(report) => {
                tracing::error!(
                    "Failed to register movements in sheet '{}': {:?}",
                    sheet_name,
                    report
                );
                false
            }
        }
    }

    /// Checks that the spreadsheet is reachable and that both configured
    /// tabs exist, naming whichever is missing.
    pub async fn test_connection(&self) -> bool {
        let Some(client) = self.connect().await else {
            return false;
        };

        let titles = match client.sheet_titles().await {
            Ok(titles) => titles,
            Err(report) => {
                tracing::error!("Could not fetch spreadsheet metadata: {:?}", report);
                return false;
            }
        };

        tracing::info!("Sheets available in the document: {}", titles.join(", "));

        let expenses_sheet = self.config.expenses_sheet_name.as_ref();
        let movements_sheet = self.config.movements_sheet_name.as_ref();
        let expenses_found = titles.iter().any(|title| title == expenses_sheet);
        let movements_found = titles.iter().any(|title| title == movements_sheet);

        match (expenses_found, movements_found) {
            (true, true) => {
                tracing::info!("Connected to both accounting sheets");
                true
            }
            (true, false) => {
                tracing::warn!("Sheet '{}' does not exist in the document", movements_sheet);
                false
            }
            (false, true) => {
                tracing::warn!("Sheet '{}' does not exist in the document", expenses_sheet);
                false
            }
            (false, false) => {
                tracing::error!(
                    "Sheets '{}' and '{}' do not exist in the document",
                    expenses_sheet,
                    movements_sheet
                );
                false
            }
        }
    }
}

/// Appends rows after the last occupied row of column A, in one batch write.
async fn append_rows(
    client: &SpreadsheetClient,
    sheet_name: &str,
    rows: Vec<Vec<Value>>,
) -> error_stack::Result<usize, SpreadsheetClientError> {
    let occupied = client.column_row_count(sheet_name, Column::new(1)).await?;
    let count = rows.len();

    client
        .write_rows_at(sheet_name, append_anchor(occupied), ValueRange::from_rows(rows))
        .await?;

    Ok(count)
}

/// Write anchor for a sheet with `occupied` non-empty rows in column A: the
/// first unoccupied row.
fn append_anchor(occupied: usize) -> CellPosition {
    CellPosition {
        col: Column::new(1),
        row: Row::from(occupied + 1),
    }
}

/// Ledger date format, shared by both sheets.
pub fn ledger_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// `[date, detail, category, COP amount, USD amount]`, amounts verbatim.
fn expenses_row(subscription: &Subscription, date: &str) -> Vec<Value> {
    vec![
        Value::String(date.to_string()),
        Value::String(subscription.detail().to_string()),
        Value::String(subscription.category().to_string()),
        subscription.monto_cop.to_cell(),
        subscription.monto_usd.to_cell(),
    ]
}

/// `[date, "Gasto recurrente: <detail>", negated COP amount]`. The amount is
/// normalized, regrouped with comma thousands separators and always written
/// with a minus sign.
fn movements_row(subscription: &Subscription, date: &str) -> Vec<Value> {
    let amount = subscription.monto_cop.to_f64().abs();
    let negated = format!("-{}", format_thousands(amount));

    vec![
        Value::String(date.to_string()),
        Value::String(format!(
            "{}: {}",
            MOVEMENT_DETAIL_PREFIX,
            subscription.detail()
        )),
        Value::String(negated),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::subscription::Amount;

    fn test_config() -> AccountingConfig {
        AccountingConfig {
            credentials_file: "does-not-exist.json".into(),
            spreadsheet_id: "test-spreadsheet".into(),
            expenses_sheet_name: "Gastos".into(),
            movements_sheet_name: "Movimientos caja".into(),
        }
    }

    fn test_subscription() -> Subscription {
        Subscription {
            detalle: Some("Suscripción de Prueba".to_string()),
            categoria: Some("Prueba".to_string()),
            monto_cop: Amount::Text("$100.000".to_string()),
            monto_usd: Amount::Text("$25".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_expenses_empty_is_noop_success() {
        // Succeeds without ever touching the network, so the bogus
        // credentials in the config are never read.
        let recorder = ExpenseRecorder::new(test_config());
        assert!(recorder.register_expenses(&[]).await);
    }

    #[tokio::test]
    async fn test_register_expenses_fails_without_credentials() {
        let recorder = ExpenseRecorder::new(test_config());
        assert!(!recorder.register_expenses(&[test_subscription()]).await);
    }

    #[tokio::test]
    async fn test_test_connection_fails_without_credentials() {
        let recorder = ExpenseRecorder::new(test_config());
        assert!(!recorder.test_connection().await);
    }

    #[tokio::test]
    async fn test_sheet_registrations_fail_independently() {
        // A failed expenses write leaves no state behind that would block
        // the movements write; each is attempted on its own and the overall
        // result is the AND of both.
        let recorder = ExpenseRecorder::new(test_config());
        let subscriptions = [test_subscription()];

        assert!(!recorder.register_in_expenses_sheet(&subscriptions).await);
        assert!(!recorder.register_in_movements_sheet(&subscriptions).await);
        assert!(!recorder.register_expenses(&subscriptions).await);
    }

    #[test]
    fn test_append_anchor_on_empty_sheet() {
        use crate::domain::sheets::a1_notation::ToA1Notation;

        let anchor = append_anchor(0);
        assert_eq!(anchor.to_a1_notation(Some("Gastos")).as_ref(), "'Gastos'!A1");
    }

    #[test]
    fn test_append_anchor_after_occupied_rows() {
        use crate::domain::sheets::a1_notation::ToA1Notation;

        assert_eq!(
            append_anchor(41).to_a1_notation(Some("Gastos")).as_ref(),
            "'Gastos'!A42"
        );
        assert_eq!(append_anchor(7).to_a1_notation(None).as_ref(), "A8");
    }

    #[test]
    fn test_ledger_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(ledger_date(date), "01/05/2026");
    }

    #[test]
    fn test_expenses_row_keeps_amounts_verbatim() {
        let row = expenses_row(&test_subscription(), "08/28/2026");
        assert_eq!(
            row,
            vec![
                Value::String("08/28/2026".to_string()),
                Value::String("Suscripción de Prueba".to_string()),
                Value::String("Prueba".to_string()),
                Value::String("$100.000".to_string()),
                Value::String("$25".to_string()),
            ]
        );
    }

    #[test]
    fn test_expenses_row_applies_defaults() {
        let row = expenses_row(&Subscription::default(), "08/28/2026");
        assert_eq!(row[1], Value::String("Sin detalles".to_string()));
        assert_eq!(row[2], Value::String("Sin categoría".to_string()));
    }

    #[test]
    fn test_movements_row_negates_and_regroups_amount() {
        let row = movements_row(&test_subscription(), "08/28/2026");
        assert_eq!(
            row,
            vec![
                Value::String("08/28/2026".to_string()),
                Value::String("Gasto recurrente: Suscripción de Prueba".to_string()),
                Value::String("-100,000".to_string()),
            ]
        );
    }

    #[test]
    fn test_movements_row_negates_numeric_amounts() {
        let subscription = Subscription {
            monto_cop: Amount::Number(-50000.0),
            ..Subscription::default()
        };
        let row = movements_row(&subscription, "08/28/2026");
        assert_eq!(row[2], Value::String("-50,000".to_string()));
    }

    #[test]
    fn test_movements_row_malformed_amount_coerces_to_zero() {
        let subscription = Subscription {
            monto_cop: Amount::Text("abc".to_string()),
            ..Subscription::default()
        };
        let row = movements_row(&subscription, "08/28/2026");
        assert_eq!(row[2], Value::String("-0".to_string()));
    }
}
