use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use padel_explorer::data::ValueRange;

// ---------------------------------------------------------------------------
// Rating badge colours
// ---------------------------------------------------------------------------

/// Hue for the lowest rating (red) and the highest (green).
const LOW_HUE: f32 = 0.0;
const HIGH_HUE: f32 = 120.0;

/// Colour for `value` on a red → green scale spanning `bounds`.
///
/// A degenerate span (every racket rated the same) maps to the top of the scale.
pub fn rating_color(value: i64, bounds: Option<ValueRange<i64>>) -> Color32 {
    let t = match bounds {
        Some(b) if b.max > b.min => {
            ((value - b.min) as f32 / (b.max - b.min) as f32).clamp(0.0, 1.0)
        }
        _ => 1.0,
    };
    let hue = LOW_HUE + t * (HIGH_HUE - LOW_HUE);
    let hsl = Hsl::new(hue, 0.65, 0.42);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_are_red_and_green() {
        let bounds = Some(ValueRange::new(1, 10));
        let low = rating_color(1, bounds);
        let high = rating_color(10, bounds);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }

    #[test]
    fn single_value_span_uses_top_colour() {
        let bounds = Some(ValueRange::new(7, 7));
        assert_eq!(rating_color(7, bounds), rating_color(10, Some(ValueRange::new(1, 10))));
        assert_eq!(rating_color(7, None), rating_color(7, bounds));
    }
}
