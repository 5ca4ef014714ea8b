use eframe::egui;

use crate::color;
use crate::data::model::JobTable;
use crate::data::stats::ChartReport;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Which chart the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Titles,
    Locations,
    Salary,
    Data,
}

pub struct JobLensApp {
    report: ChartReport,
    filtered: JobTable,
    status: String,
    tab: Tab,
}

impl JobLensApp {
    pub fn new(report: ChartReport, filtered: JobTable, source: &str, total_rows: usize) -> Self {
        let status = format!(
            "{total_rows} postings in {source}, {} matched",
            filtered.len()
        );
        JobLensApp {
            report,
            filtered,
            status,
            tab: Tab::Titles,
        }
    }
}

impl eframe::App for JobLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: chart tabs + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.tab, &self.status);
        });

        // ---- Central panel: the selected chart ----
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Titles => {
                let entries: Vec<(String, f64)> = self
                    .report
                    .top_titles
                    .iter()
                    .map(|(label, n)| (label.clone(), *n as f64))
                    .collect();
                charts::bar_chart(
                    ui,
                    "title_frequency",
                    "Job Title",
                    "Number of Postings",
                    &entries,
                    color::TITLE_BAR,
                );
            }
            Tab::Locations => charts::pie_chart(ui, &self.report.top_locations),
            Tab::Salary => match &self.report.avg_salary {
                Some(means) => charts::bar_chart(
                    ui,
                    "average_salary",
                    "Job Title",
                    "Average Salary (approx)",
                    means,
                    color::SALARY_BAR,
                ),
                None => {
                    ui.centered_and_justified(|ui: &mut egui::Ui| {
                        ui.heading("No 'Salary' column in this dataset");
                    });
                }
            },
            Tab::Data => panels::data_table(ui, &self.filtered),
        });
    }
}
