use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colors
// ---------------------------------------------------------------------------

/// Bar fill for the title-frequency chart.
pub const TITLE_BAR: Color32 = Color32::from_rgb(0x5d, 0xa9, 0xe9);
/// Bar fill for the average-salary chart.
pub const SALARY_BAR: Color32 = Color32::from_rgb(0x57, 0xb8, 0x6b);

/// Generates `n` visually distinct colours using evenly spaced hues,
/// used to fill the pie slices.
pub fn slice_colors(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n.max(1) as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.60);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_colors_are_distinct() {
        let colors = slice_colors(10);
        assert_eq!(colors.len(), 10);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn zero_slices_need_zero_colors() {
        assert!(slice_colors(0).is_empty());
    }
}
