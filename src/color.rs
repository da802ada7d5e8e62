use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// One colour per selected column, evenly spaced around the hue wheel.
#[derive(Debug, Clone, Default)]
pub struct SeriesPalette {
    colors: Vec<Color32>,
}

impl SeriesPalette {
    pub fn new(series: usize) -> Self {
        let colors = (0..series)
            .map(|i| hue_to_color32(i as f32 / series as f32 * 360.0))
            .collect();
        SeriesPalette { colors }
    }

    /// Colour of series `index`; falls back to grey past the end.
    pub fn color(&self, index: usize) -> Color32 {
        self.colors.get(index).copied().unwrap_or(Color32::GRAY)
    }

    /// Colour of the series at a possibly negative position (`-1` = last).
    pub fn color_at(&self, position: isize) -> Color32 {
        if self.colors.len() == 1 {
            return self.colors[0];
        }
        crate::data::matrix::resolve_position(position, self.colors.len())
            .map(|i| self.colors[i])
            .unwrap_or(Color32::GRAY)
    }
}

fn hue_to_color32(hue: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
    let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8);
    Color32::from_rgb(r, g, b)
}
