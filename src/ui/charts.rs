use std::f32::consts::{FRAC_PI_2, TAU};
use std::ops::RangeInclusive;

use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2,
};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::slice_colors;

/// Pie slices start here, measured counter-clockwise from the x-axis.
const PIE_START_ANGLE_DEG: f32 = 140.0;

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Render one labeled bar per entry, tallest-first order as given.
/// Category names sit on the x-axis ticks; hovering a bar shows the full
/// name and value.
pub fn bar_chart(
    ui: &mut Ui,
    id: &str,
    x_label: &str,
    y_label: &str,
    entries: &[(String, f64)],
    fill: Color32,
) {
    if entries.is_empty() {
        empty_notice(ui, "Nothing to chart");
        return;
    }

    let bars: Vec<Bar> = entries
        .iter()
        .enumerate()
        .map(|(i, (label, value))| Bar::new(i as f64, *value).name(label).width(0.6))
        .collect();

    let chart = BarChart::new(bars).color(fill).element_formatter(Box::new(
        |bar: &Bar, _chart: &BarChart| format!("{}\n{:.1}", bar.name, bar.value),
    ));

    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let tick_label = move |mark: GridMark, _range: &RangeInclusive<f64>| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels
            .get(rounded as usize)
            .map(|l| clip(l, 14))
            .unwrap_or_default()
    };

    Plot::new(id.to_string())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .x_axis_formatter(tick_label)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}…")
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the entries as pie slices with one-decimal percentage labels,
/// plus a swatch legend beside the pie. Percentages are of the charted
/// entries, matching what the slices show.
pub fn pie_chart(ui: &mut Ui, entries: &[(String, usize)]) {
    let total: usize = entries.iter().map(|(_, n)| n).sum();
    if total == 0 {
        empty_notice(ui, "Nothing to chart");
        return;
    }
    let colors = slice_colors(entries.len());

    ui.horizontal(|ui| {
        let side = ui
            .available_height()
            .min(ui.available_width() * 0.7)
            .clamp(160.0, 480.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let radius = side * 0.42;

        let mut angle = PIE_START_ANGLE_DEG.to_radians();
        for ((_, count), color) in entries.iter().zip(&colors) {
            let fraction = *count as f32 / total as f32;
            let sweep = fraction * TAU;
            paint_slice(&painter, center, radius, angle, sweep, *color);

            let mid = angle + sweep / 2.0;
            painter.text(
                center + polar(mid, radius * 0.62),
                Align2::CENTER_CENTER,
                format!("{:.1}%", fraction * 100.0),
                FontId::proportional(13.0),
                Color32::BLACK,
            );
            angle += sweep;
        }

        ui.add_space(12.0);
        ui.vertical(|ui| {
            for ((label, count), color) in entries.iter().zip(&colors) {
                ui.horizontal(|ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, CornerRadius::same(2), *color);
                    ui.label(format!("{label}  ({count})"));
                });
            }
        });
    });
}

/// Screen offset for a polar coordinate; positive angles go
/// counter-clockwise, so the y component flips for screen space.
fn polar(angle: f32, r: f32) -> Vec2 {
    Vec2::new(angle.cos() * r, -angle.sin() * r)
}

/// Fill one wedge. Wedges are painted in sub-arcs of at most 90° so every
/// polygon handed to the tessellator stays convex.
fn paint_slice(
    painter: &eframe::egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let end = start + sweep;
    let mut a0 = start;
    while end - a0 > 1e-4 {
        let a1 = (a0 + FRAC_PI_2).min(end);
        let steps = (((a1 - a0) / 0.05).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let t = a0 + (a1 - a0) * s as f32 / steps as f32;
            points.push(center + polar(t, radius));
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        a0 = a1;
    }
}

fn empty_notice(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(message);
    });
}
