use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::JobTable;

/// Fixed name of the exported snapshot, written beside the input file.
pub const FILTERED_FILE_NAME: &str = "filtered_sample_jobs.csv";

// ---------------------------------------------------------------------------
// Filtered-table export
// ---------------------------------------------------------------------------

/// Persist the filtered table as CSV next to the input file.
///
/// Returns the path written, or `None` when the table has no rows — an
/// absent output file is how "no matches" is distinguished from "all rows
/// matched". An existing file at the path is overwritten.
pub fn save_filtered(filtered: &JobTable, input_path: &Path) -> Result<Option<PathBuf>> {
    if filtered.is_empty() {
        return Ok(None);
    }

    let out_path = input_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(FILTERED_FILE_NAME);
    write_csv(filtered, &out_path)?;
    Ok(Some(out_path))
}

/// Write the table as delimited text with a header row.
pub fn write_csv(table: &JobTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer
        .write_record(&table.columns)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::model::CellValue;
    use super::*;

    fn table(rows: Vec<Vec<CellValue>>) -> JobTable {
        JobTable::new(vec!["Job Title".into(), "Salary".into()], rows)
    }

    #[test]
    fn empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.csv");

        let saved = save_filtered(&table(Vec::new()), &input).unwrap();
        assert!(saved.is_none());
        assert!(!dir.path().join(FILTERED_FILE_NAME).exists());
    }

    #[test]
    fn rows_and_columns_survive_the_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.csv");
        let filtered = table(vec![
            vec![
                CellValue::String("Python Developer".into()),
                CellValue::String("$50,000".into()),
            ],
            vec![CellValue::String("Data Scientist".into()), CellValue::Null],
        ]);

        let saved = save_filtered(&filtered, &input).unwrap().unwrap();
        assert_eq!(saved, dir.path().join(FILTERED_FILE_NAME));

        let reloaded = super::super::loader::load_file(&saved).unwrap();
        assert_eq!(reloaded.columns, filtered.columns);
        assert_eq!(reloaded.len(), filtered.len());
        // The missing salary comes back as a missing value, not empty text.
        assert_eq!(reloaded.value(1, 1), &CellValue::Null);
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.csv");
        std::fs::write(dir.path().join(FILTERED_FILE_NAME), "stale").unwrap();

        let one_row = table(vec![vec![
            CellValue::String("Python Developer".into()),
            CellValue::Null,
        ]]);
        save_filtered(&one_row, &input).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(FILTERED_FILE_NAME)).unwrap();
        assert!(contents.starts_with("Job Title,Salary"));
    }
}
