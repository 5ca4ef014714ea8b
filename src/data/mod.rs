/// Data layer: core types, loading, filtering, export, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ JobTable  │  ordered columns, ordered rows
///   └──────────┘
///        │
///        ├──────────────┬───────────────┐
///        ▼              ▼               ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  filter   │   │  stats    │   │  export   │
///   └──────────┘   └──────────┘   └──────────┘
///    keyword mask    missing/count    filtered CSV
///                    salary means
/// ```
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod salary;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::export::{FILTERED_FILE_NAME, save_filtered};
    use super::filter::{KeywordFilter, apply};
    use super::loader::load_file;
    use super::model::CellValue;
    use super::stats::average_salary_by_title;

    /// The whole pipeline over a small dataset: load, filter on the title
    /// keyword only, export, and aggregate salaries over the filtered rows.
    #[test]
    fn load_filter_export_aggregate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.csv");
        std::fs::write(
            &input,
            "Job Title,Location,Salary\n\
             Python Developer,Pune,\"$50,000\"\n\
             Data Scientist,Remote,\"$70,000\"\n\
             Python Developer,Remote,\n",
        )
        .unwrap();

        let table = load_file(&input).unwrap();
        assert_eq!(table.len(), 3);

        let filtered = apply(&table, &KeywordFilter::new("Python", "")).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(
            filtered.value(0, 1),
            &CellValue::String("Pune".into()),
            "original order is preserved"
        );
        assert_eq!(filtered.value(1, 1), &CellValue::String("Remote".into()));

        let saved = save_filtered(&filtered, &input).unwrap().unwrap();
        assert_eq!(saved, dir.path().join(FILTERED_FILE_NAME));
        let reloaded = load_file(&saved).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.columns, table.columns);

        // The missing third salary is excluded from the group mean.
        let means = average_salary_by_title(&filtered).unwrap();
        assert_eq!(means, vec![("Python Developer".to_string(), 50000.0)]);
    }

    #[test]
    fn no_matches_leaves_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("jobs.csv");
        std::fs::write(&input, "Job Title,Location\nPython Developer,Pune\n").unwrap();

        let table = load_file(&input).unwrap();
        let filtered = apply(&table, &KeywordFilter::new("Haskell", "")).unwrap();
        assert!(filtered.is_empty());
        assert!(save_filtered(&filtered, &input).unwrap().is_none());
        assert!(!dir.path().join(FILTERED_FILE_NAME).exists());
    }
}
