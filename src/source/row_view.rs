use crate::types::{ColumnName, RawCell, RowNumber};

/// A named text cell in a raw row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    /// Column header the cell came from.
    pub name: ColumnName,
    /// Untrimmed cell text.
    pub text: RawCell,
}

impl TextField {
    /// Build a cell from header and text.
    pub fn new(name: impl Into<ColumnName>, text: impl Into<RawCell>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// One untyped source row keyed by original column name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    /// One-based data row number (header excluded).
    pub row: RowNumber,
    /// Cells in source column order.
    pub text_fields: Vec<TextField>,
}

impl RawRecord {
    /// Text of the cell under `column`, if the row has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.text_fields
            .iter()
            .find(|field| field.name == column)
            .map(|field| field.text.as_str())
    }
}

/// Full raw row set of a source table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column headers in source order.
    pub headers: Vec<ColumnName>,
    /// Data rows in source order.
    pub rows: Vec<RawRecord>,
}

impl RawTable {
    /// Build a table from headers and positional row cells.
    ///
    /// Rows shorter than the header are padded with empty cells; extra cells
    /// beyond the header are dropped.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<ColumnName>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<RawCell>,
    {
        let headers: Vec<ColumnName> = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| {
                let mut cells = cells.into_iter().map(Into::<RawCell>::into);
                let text_fields = headers
                    .iter()
                    .map(|name| TextField::new(name.clone(), cells.next().unwrap_or_default()))
                    .collect();
                RawRecord {
                    row: idx + 1,
                    text_fields,
                }
            })
            .collect();
        Self { headers, rows }
    }

    /// True when `column` is one of the table headers.
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_pads_short_rows_and_numbers_from_one() {
        let table = RawTable::from_rows(
            ["A", "B", "C"],
            vec![vec!["1", "2"], vec!["3", "4", "5", "6"]],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].row, 1);
        assert_eq!(table.rows[0].get("C"), Some(""));
        assert_eq!(table.rows[1].row, 2);
        assert_eq!(table.rows[1].get("C"), Some("5"));
        assert_eq!(table.rows[1].text_fields.len(), 3);
        assert_eq!(table.rows[1].get("D"), None);
    }

    #[test]
    fn has_column_matches_exact_header() {
        let table = RawTable::from_rows(["Brand"], Vec::<Vec<&str>>::new());
        assert!(table.has_column("Brand"));
        assert!(!table.has_column("brand"));
        assert!(table.is_empty());
    }
}
