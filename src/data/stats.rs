use std::collections::HashMap;

use super::model::{JobTable, LOCATION_COLUMN, SALARY_COLUMN, TITLE_COLUMN};
use super::salary::salary_value;

/// How many entries each ranking keeps.
pub const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Missing-value summary
// ---------------------------------------------------------------------------

/// Per-column count of missing cells, in column order.
pub fn missing_counts(table: &JobTable) -> Vec<(String, usize)> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let missing = table.rows.iter().filter(|row| row[col].is_null()).count();
            (name.clone(), missing)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Frequency counts
// ---------------------------------------------------------------------------

/// Occurrence counts of each distinct value in a column, sorted by count
/// descending. Missing cells are not counted. The sort is stable, so ties
/// keep the order in which values were first encountered.
///
/// A column the table does not have yields an empty result (the chart
/// degrades rather than failing; only keyword lookups treat absence as
/// fatal).
pub fn value_counts(table: &JobTable, column: &str) -> Vec<(String, usize)> {
    let Some(col) = table.column_index(column) else {
        log::warn!("column '{column}' not found; skipping its frequency count");
        return Vec::new();
    };

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in &table.rows {
        let cell = &row[col];
        if cell.is_null() {
            continue;
        }
        let key = cell.to_string();
        match positions.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

// ---------------------------------------------------------------------------
// Salary means
// ---------------------------------------------------------------------------

/// Arithmetic mean of the numeric salary per job title, sorted by mean
/// descending (stable, first-encountered order on ties).
///
/// Returns `None` when the table has no `Salary` column. Rows whose salary
/// does not parse contribute nothing to their group; titles with no
/// parseable salary at all are excluded rather than reported as zero.
pub fn average_salary_by_title(table: &JobTable) -> Option<Vec<(String, f64)>> {
    let salary_col = table.column_index(SALARY_COLUMN)?;
    let Some(title_col) = table.column_index(TITLE_COLUMN) else {
        log::warn!("column '{TITLE_COLUMN}' not found; skipping the salary ranking");
        return Some(Vec::new());
    };

    // (title, sum, count) per group, in first-encountered order.
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in &table.rows {
        let title = &row[title_col];
        if title.is_null() {
            continue;
        }
        let Some(amount) = salary_value(&row[salary_col]) else {
            continue;
        };
        let key = title.to_string();
        match positions.get(&key) {
            Some(&i) => {
                groups[i].1 += amount;
                groups[i].2 += 1;
            }
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, amount, 1));
            }
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .map(|(title, sum, n)| (title, sum / n as f64))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    Some(means)
}

// ---------------------------------------------------------------------------
// ChartReport – everything the viewer renders
// ---------------------------------------------------------------------------

/// The three aggregate views derived from the original (unfiltered) table.
#[derive(Debug, Clone)]
pub struct ChartReport {
    /// Top job titles by posting count.
    pub top_titles: Vec<(String, usize)>,
    /// Top locations by posting count.
    pub top_locations: Vec<(String, usize)>,
    /// Top job titles by mean salary; `None` when there is no salary column.
    pub avg_salary: Option<Vec<(String, f64)>>,
}

impl ChartReport {
    pub fn build(table: &JobTable) -> Self {
        let mut top_titles = value_counts(table, TITLE_COLUMN);
        top_titles.truncate(TOP_N);
        let mut top_locations = value_counts(table, LOCATION_COLUMN);
        top_locations.truncate(TOP_N);
        let avg_salary = average_salary_by_title(table).map(|mut means| {
            means.truncate(TOP_N);
            means
        });

        ChartReport {
            top_titles,
            top_locations,
            avg_salary,
        }
    }
}
