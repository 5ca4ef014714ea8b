use thiserror::Error;

use super::model::{CellValue, JobTable, LOCATION_COLUMN, TITLE_COLUMN};

// ---------------------------------------------------------------------------
// Keyword predicates over title and location
// ---------------------------------------------------------------------------

/// User-supplied keyword filter: up to one keyword per column, each matched
/// case-insensitively as a literal substring. `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    pub title: Option<String>,
    pub location: Option<String>,
}

impl KeywordFilter {
    /// Build a filter from raw prompt input. Surrounding whitespace is
    /// trimmed; an empty keyword deactivates that predicate.
    pub fn new(title_raw: &str, location_raw: &str) -> Self {
        KeywordFilter {
            title: normalize(title_raw),
            location: normalize(location_raw),
        }
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A keyword names a column the table does not have. The columns are
/// otherwise assumed present, so this is fatal to the pipeline.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("column '{0}' not found in the dataset")]
    MissingColumn(&'static str),
}

// ---------------------------------------------------------------------------
// Applying the filter
// ---------------------------------------------------------------------------

/// Return the positions of rows that pass every active predicate, in the
/// original row order.
///
/// A row passes an active predicate when its cell, rendered as text,
/// contains the keyword case-insensitively. `Null` cells never match.
/// Keywords are literal: `C++` matches `Senior C++ Engineer`, and `.*`
/// matches only a literal `.*`.
pub fn filtered_indices(
    table: &JobTable,
    filter: &KeywordFilter,
) -> Result<Vec<usize>, FilterError> {
    let title = active_predicate(table, &filter.title, TITLE_COLUMN)?;
    let location = active_predicate(table, &filter.location, LOCATION_COLUMN)?;

    let indices = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            [&title, &location].into_iter().flatten().all(
                |(col, needle): &(usize, String)| cell_matches(&row[*col], needle),
            )
        })
        .map(|(i, _)| i)
        .collect();
    Ok(indices)
}

/// Filter the table down to the matching rows. Row order and the column set
/// are preserved, so applying the same filter twice is a no-op.
pub fn apply(table: &JobTable, filter: &KeywordFilter) -> Result<JobTable, FilterError> {
    let indices = filtered_indices(table, filter)?;
    Ok(table.subset(&indices))
}

/// Resolve a keyword to (column position, lowercased needle), or `None`
/// when the keyword is inactive. A keyword aimed at an absent column errors.
fn active_predicate(
    table: &JobTable,
    keyword: &Option<String>,
    column: &'static str,
) -> Result<Option<(usize, String)>, FilterError> {
    match keyword {
        None => Ok(None),
        Some(kw) => {
            let col = table
                .column_index(column)
                .ok_or(FilterError::MissingColumn(column))?;
            Ok(Some((col, kw.to_lowercase())))
        }
    }
}

fn cell_matches(cell: &CellValue, needle_lower: &str) -> bool {
    if cell.is_null() {
        return false;
    }
    cell.to_string().to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, location: &str) -> Vec<CellValue> {
        vec![
            CellValue::String(title.into()),
            CellValue::String(location.into()),
        ]
    }

    fn table() -> JobTable {
        JobTable::new(
            vec![TITLE_COLUMN.into(), LOCATION_COLUMN.into()],
            vec![
                row("Python Developer", "Pune"),
                row("Data Scientist", "Remote"),
                row("Senior C++ Engineer", "Berlin"),
                row("python developer", "Remote"),
                vec![CellValue::Null, CellValue::String("Pune".into())],
            ],
        )
    }

    #[test]
    fn empty_keywords_select_all_rows() {
        let t = table();
        let idx = filtered_indices(&t, &KeywordFilter::new("", "   ")).unwrap();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let t = table();
        let idx = filtered_indices(&t, &KeywordFilter::new("python", "remote")).unwrap();
        assert_eq!(idx, vec![3]);
    }

    #[test]
    fn matching_is_case_insensitive_and_order_preserving() {
        let t = table();
        let filtered = apply(&t, &KeywordFilter::new("PYTHON", "")).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(
            filtered.value(0, 0),
            &CellValue::String("Python Developer".into())
        );
        assert_eq!(
            filtered.value(1, 0),
            &CellValue::String("python developer".into())
        );
    }

    #[test]
    fn special_characters_match_literally() {
        let t = table();
        let idx = filtered_indices(&t, &KeywordFilter::new("C++", "")).unwrap();
        assert_eq!(idx, vec![2]);
        // `.*` is not a wildcard.
        let idx = filtered_indices(&t, &KeywordFilter::new(".*", "")).unwrap();
        assert!(idx.is_empty());
    }

    #[test]
    fn null_cells_never_match() {
        let t = table();
        let idx = filtered_indices(&t, &KeywordFilter::new("", "pune")).unwrap();
        // Row 4 has a Null title but matching only applies to Location here.
        assert_eq!(idx, vec![0, 4]);
        let idx = filtered_indices(&t, &KeywordFilter::new("developer", "pune")).unwrap();
        assert_eq!(idx, vec![0]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let t = table();
        let filter = KeywordFilter::new("developer", "");
        let once = apply(&t, &filter).unwrap();
        let twice = apply(&once, &filter).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn keyword_on_missing_column_is_an_error() {
        let t = JobTable::new(
            vec!["Company".into()],
            vec![vec![CellValue::String("Acme".into())]],
        );
        let err = filtered_indices(&t, &KeywordFilter::new("python", "")).unwrap_err();
        assert!(matches!(err, FilterError::MissingColumn(TITLE_COLUMN)));
        // Without an active keyword the column is never looked up.
        assert!(filtered_indices(&t, &KeywordFilter::new("", "")).is_ok());
    }
}
