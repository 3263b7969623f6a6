use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chocolate colour scheme
// ---------------------------------------------------------------------------

/// Hue / saturation of saddle brown, rgb(139, 69, 19).
const CHOCOLATE_HUE: f32 = 25.0;
const CHOCOLATE_SATURATION: f32 = 0.76;

fn hsl_to_color32(hsl: Hsl, alpha: u8) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgba_unmultiplied(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
        alpha,
    )
}

/// `n` brown shades from dark to light, used for leaderboard medals and
/// chart accents.
pub fn chocolate_shades(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let lightness = 0.3 + 0.45 * (i as f32 / n as f32);
            hsl_to_color32(Hsl::new(CHOCOLATE_HUE, CHOCOLATE_SATURATION, lightness), 255)
        })
        .collect()
}

/// Colours for the two trend charts.
#[derive(Debug, Clone, Copy)]
pub struct ChartColors {
    pub line: Color32,
    pub bar: Color32,
}

impl Default for ChartColors {
    fn default() -> Self {
        let base = Hsl::new(CHOCOLATE_HUE, CHOCOLATE_SATURATION, 0.31);
        ChartColors {
            line: hsl_to_color32(base, 255),
            bar: hsl_to_color32(base, 180),
        }
    }
}
