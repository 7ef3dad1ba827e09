//! Format-independent tabular model handed to a [`crate::writer::ReportWriter`].

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// One row; an empty row renders as a blank line.
pub type Row = Vec<Cell>;

/// A named worksheet. The first row is the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    /// Width hint per column, in characters.
    pub column_widths: Vec<f64>,
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Start a sheet with a header row built from `(label, width)` pairs.
    pub fn with_columns(name: &str, columns: &[(&str, f64)]) -> Self {
        Self {
            name: name.to_string(),
            column_widths: columns.iter().map(|(_, w)| *w).collect(),
            rows: vec![columns.iter().map(|(label, _)| Cell::from(*label)).collect()],
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn push_blank_row(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// An ordered set of sheets making up one workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub sheets: Vec<Sheet>,
}

impl Report {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_columns_builds_header_and_widths() {
        let sheet = Sheet::with_columns("Hashtags", &[("Hashtag", 30.0), ("Count", 10.0)]);
        assert_eq!(sheet.column_widths, vec![30.0, 10.0]);
        assert_eq!(
            sheet.header(),
            Some(&vec![Cell::from("Hashtag"), Cell::from("Count")])
        );
        assert!(sheet.body().is_empty());
    }

    #[test]
    fn test_cell_conversions() {
        assert_eq!(Cell::from(3u64), Cell::Number(3.0));
        assert_eq!(Cell::from(-2i64), Cell::Number(-2.0));
        assert_eq!(Cell::from("x"), Cell::Text("x".to_string()));
        assert_eq!(Cell::from(String::from("y")), Cell::Text("y".to_string()));
    }

    #[test]
    fn test_report_lookup() {
        let report = Report {
            sheets: vec![Sheet::with_columns("A", &[]), Sheet::with_columns("B", &[])],
        };
        assert_eq!(report.sheet_names(), vec!["A", "B"]);
        assert!(report.sheet("B").is_some());
        assert!(report.sheet("C").is_none());
    }
}
