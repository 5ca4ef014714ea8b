use std::fmt;

/// Column holding the posting's title text.
pub const TITLE_COLUMN: &str = "Job Title";
/// Column holding the posting's location text.
pub const LOCATION_COLUMN: &str = "Location";
/// Optional column holding free-text salary information.
pub const SALARY_COLUMN: &str = "Salary";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what delimited text can hold.
/// `Null` is the missing-value marker: an empty field, an absent key, or a
/// null in the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            // Renders empty so exported missing cells reload as missing.
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric aggregation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this cell is the missing-value marker.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// JobTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset: named columns in source order, rows in source order.
/// Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct JobTable {
    /// Column names, in the order they appear in the input file.
    pub columns: Vec<String>,
    /// Row-major cells, each row aligned with `columns`.
    pub rows: Vec<Vec<CellValue>>,
}

impl JobTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        JobTable { columns, rows }
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The cell at (`row`, `col`). Panics on out-of-range indices, which
    /// only loader bugs could produce.
    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        &self.rows[row][col]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A new table containing the given rows (by position, in the given
    /// order) with the same column set.
    pub fn subset(&self, indices: &[usize]) -> JobTable {
        JobTable {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}
