use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::app::Tab;
use crate::data::model::JobTable;

// ---------------------------------------------------------------------------
// Top bar – chart tabs and dataset status
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, tab: &mut Tab, status: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(tab, Tab::Titles, "Top Job Titles");
        ui.selectable_value(tab, Tab::Locations, "Locations");
        ui.selectable_value(tab, Tab::Salary, "Average Salary");
        ui.selectable_value(tab, Tab::Data, "Filtered Data");
        ui.separator();
        ui.label(status);
    });
}

// ---------------------------------------------------------------------------
// Data tab – the filtered rows
// ---------------------------------------------------------------------------

/// Scrollable table of the filtered postings, one column per input column.
pub fn data_table(ui: &mut Ui, table: &JobTable) {
    if table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No rows matched the filters");
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .columns(Column::auto().at_least(90.0), table.columns.len())
        .header(22.0, |mut header| {
            for name in &table.columns {
                header.col(|ui| {
                    ui.strong(name.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, table.len(), |mut row| {
                let r = row.index();
                for c in 0..table.columns.len() {
                    row.col(|ui| {
                        ui.label(table.value(r, c).to_string());
                    });
                }
            });
        });
}
