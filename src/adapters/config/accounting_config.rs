use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError};

pub const DEFAULT_CREDENTIALS_FILE: &str = "creds.json";
pub const DEFAULT_SPREADSHEET_ID: &str = "1e1UQWdcRDDawPjIuHIS0yxQlxtczEdiTPFBltpfymmA";
pub const DEFAULT_EXPENSES_SHEET_NAME: &str = "Gastos";
pub const DEFAULT_MOVEMENTS_SHEET_NAME: &str = "Movimientos caja";

/// Fully-resolved accounting configuration. Built once at startup; the
/// recorder only ever sees resolved values, never raw environment state.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct AccountingConfig {
    pub credentials_file: Box<str>,
    pub spreadsheet_id: Box<str>,
    pub expenses_sheet_name: Box<str>,
    pub movements_sheet_name: Box<str>,
}

impl AccountingConfig {
    /// Resolution order: built-in defaults, then an optional `Accounting`
    /// config file in the working directory, then `ACCOUNTING_*` environment
    /// variables. The credentials path additionally honors
    /// `GOOGLE_CREDENTIALS_FILE`, which predates the `ACCOUNTING_` prefix.
    pub fn load() -> Result<Self, ConfigError> {
        let credentials_default = std::env::var("GOOGLE_CREDENTIALS_FILE")
            .unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE.to_string());

        Self::builder_with_defaults(credentials_default)?
            .add_source(config::File::with_name("Accounting").required(false))
            .add_source(config::Environment::with_prefix("ACCOUNTING"))
            .build()?
            .try_deserialize()
    }

    fn builder_with_defaults(
        credentials_default: String,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("credentials_file", credentials_default)?
            .set_default("spreadsheet_id", DEFAULT_SPREADSHEET_ID)?
            .set_default("expenses_sheet_name", DEFAULT_EXPENSES_SHEET_NAME)?
            .set_default("movements_sheet_name", DEFAULT_MOVEMENTS_SHEET_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_without_overrides() {
        let config: AccountingConfig =
            AccountingConfig::builder_with_defaults(DEFAULT_CREDENTIALS_FILE.to_string())
                .unwrap()
                .build()
                .unwrap()
                .try_deserialize()
                .unwrap();

        assert_eq!(config.credentials_file.as_ref(), "creds.json");
        assert_eq!(config.expenses_sheet_name.as_ref(), "Gastos");
        assert_eq!(config.movements_sheet_name.as_ref(), "Movimientos caja");
        assert_eq!(config.spreadsheet_id.as_ref(), DEFAULT_SPREADSHEET_ID);
    }
}
