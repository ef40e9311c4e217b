use super::{
    a1_notation::{A1Notation, ToA1Notation},
    column::Column,
    row::Row,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        match sheet_name {
            Some(sheet_name) => A1Notation(format!("'{}'!{}{}", sheet_name, self.col, self.row)),
            None => A1Notation(format!("{}{}", self.col, self.row)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_anchor_with_sheet_title() {
        let position = CellPosition {
            col: Column::new(1),
            row: Row(42),
        };
        assert_eq!(
            position.to_a1_notation(Some("Gastos")).as_ref(),
            "'Gastos'!A42"
        );
    }

    #[test]
    fn test_cell_anchor_without_sheet_title() {
        let position = CellPosition {
            col: Column::new(27),
            row: Row(3),
        };
        assert_eq!(position.to_a1_notation(None).as_ref(), "AA3");
    }
}
