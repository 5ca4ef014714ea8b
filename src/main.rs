mod app;
mod color;
mod data;
mod ui;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, anyhow};
use eframe::egui;

use app::JobLensApp;
use data::filter::{self, KeywordFilter};
use data::model::JobTable;
use data::stats::ChartReport;
use data::{export, loader, stats};

/// Input read when no path is given on the command line.
const DEFAULT_INPUT: &str = "sample_jobs_large.csv";
const PREVIEW_ROWS: usize = 5;
const FILTERED_PREVIEW_ROWS: usize = 10;

fn main() -> Result<()> {
    env_logger::init();

    let input_path = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
    );

    // The only fatal path: an unreadable input ends the run here.
    let table = match loader::load_file(&input_path) {
        Ok(table) => {
            println!("File loaded successfully: {}", input_path.display());
            table
        }
        Err(e) => {
            log::error!("failed to load {}: {e:#}", input_path.display());
            eprintln!(
                "Could not load {}: {e:#}\nCheck the file path.",
                input_path.display()
            );
            process::exit(1);
        }
    };
    log::info!(
        "loaded {} postings with columns {:?}",
        table.len(),
        table.columns
    );

    println!("\nSample data from the file:\n");
    print_preview(&table, PREVIEW_ROWS);
    println!("\nColumns available: {:?}", table.columns);

    let job_keyword = prompt("\nEnter job role keyword (e.g. Python, Data Scientist): ")?;
    let location_keyword = prompt("Enter location keyword (e.g. Pune, Remote): ")?;
    let keyword_filter = KeywordFilter::new(&job_keyword, &location_keyword);

    let filtered = filter::apply(&table, &keyword_filter)?;
    println!(
        "\nFound {} jobs for '{}' in '{}':\n",
        filtered.len(),
        label_or_any(&keyword_filter.title),
        label_or_any(&keyword_filter.location)
    );
    if !filtered.is_empty() {
        print_preview(&filtered, FILTERED_PREVIEW_ROWS);
    }

    match export::save_filtered(&filtered, &input_path)? {
        Some(path) => println!("\nSaved filtered jobs to: {}", path.display()),
        None => println!("No matching jobs found. File not saved."),
    }

    println!("\nMissing values in each column:");
    for (column, missing) in stats::missing_counts(&table) {
        println!("  {column}: {missing}");
    }

    let report = ChartReport::build(&table);
    if report.avg_salary.is_none() {
        println!("\nNo 'Salary' column found in the dataset; skipping the salary chart.");
    }

    let source = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string();
    let total_rows = table.len();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Job Lens – Postings Explorer",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(JobLensApp::new(
                report, filtered, &source, total_rows,
            )))
        }),
    )
    .map_err(|e| anyhow!("failed to start the chart viewer: {e}"))?;

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading keyword input")?;
    Ok(line.trim().to_string())
}

fn label_or_any(keyword: &Option<String>) -> &str {
    keyword.as_deref().unwrap_or("Any")
}

// ---------------------------------------------------------------------------
// Console preview
// ---------------------------------------------------------------------------

const PREVIEW_CELL_WIDTH: usize = 24;

/// Print the first `limit` rows as aligned columns.
fn print_preview(table: &JobTable, limit: usize) {
    let header: Vec<String> = table
        .columns
        .iter()
        .map(|name| clip(name, PREVIEW_CELL_WIDTH))
        .collect();
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();

    let mut rendered: Vec<Vec<String>> = Vec::new();
    for row in table.rows.iter().take(limit) {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| clip(&cell.to_string(), PREVIEW_CELL_WIDTH))
            .collect();
        for (width, cell) in widths.iter_mut().zip(&cells) {
            *width = (*width).max(cell.chars().count());
        }
        rendered.push(cells);
    }

    print_padded(&header, &widths);
    for cells in &rendered {
        print_padded(cells, &widths);
    }
    if table.len() > limit {
        println!("  … and {} more rows", table.len() - limit);
    }
}

fn print_padded(cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", line.trim_end());
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}…")
    }
}
