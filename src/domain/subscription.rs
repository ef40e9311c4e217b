use serde::Deserialize;

use super::money::parse_currency;

pub const DEFAULT_DETAIL: &str = "Sin detalles";
pub const DEFAULT_CATEGORY: &str = "Sin categoría";

/// One recurring subscription entry, as supplied by the subscriptions sheet.
/// Field names follow the sheet's headers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub detalle: Option<String>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(rename = "montoCOP", default)]
    pub monto_cop: Amount,
    #[serde(rename = "montoUSD", default)]
    pub monto_usd: Amount,
}

impl Subscription {
    pub fn detail(&self) -> &str {
        self.detalle.as_deref().unwrap_or(DEFAULT_DETAIL)
    }

    pub fn category(&self) -> &str {
        self.categoria.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Amount cells arrive either as currency strings (`"$100.000"`) or as bare
/// numbers, depending on how the source sheet cell was formatted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(f64),
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Text(String::new())
    }
}

impl Amount {
    /// Numeric value after currency normalization.
    pub fn to_f64(&self) -> f64 {
        match self {
            Amount::Text(text) => parse_currency(text),
            Amount::Number(number) => *number,
        }
    }

    /// The value as it should appear verbatim in a ledger cell.
    pub fn to_cell(&self) -> serde_json::Value {
        match self {
            Amount::Text(text) => serde_json::Value::String(text.clone()),
            Amount::Number(number) => serde_json::json!(number),
        }
    }
}
