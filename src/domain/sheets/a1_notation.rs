use std::fmt::Formatter;

use super::column::Column;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl From<String> for A1Notation {
    fn from(s: String) -> Self {
        A1Notation(s)
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

impl ToA1Notation for Column {
    /// Whole-column range, e.g. `'Gastos'!A:A`.
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}:{}", sheet_name, self, self)),
            None => A1Notation(format!("{}:{}", self, self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_range_with_sheet_title() {
        let range = Column::new(1).to_a1_notation(Some("Movimientos caja"));
        assert_eq!(range.as_ref(), "'Movimientos caja'!A:A");
    }

    #[test]
    fn test_column_range_without_sheet_title() {
        let range = Column::new(2).to_a1_notation(None);
        assert_eq!(range.as_ref(), "B:B");
    }
}
