//! Window palette and pie-slice colours.

use eframe::egui::Color32;
use once_cell::sync::Lazy;

pub const BACKGROUND: Color32 = Color32::from_rgb(0xf6, 0xf4, 0xf0);
pub const INDIGO: Color32 = Color32::from_rgb(0x3f, 0x51, 0xb5);
pub const INDIGO_LIGHT: Color32 = Color32::from_rgb(0x5a, 0x6f, 0xf0);
pub const GROUP_BORDER: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
pub const GROUP_TOP: Color32 = Color32::WHITE;
pub const GROUP_BOTTOM: Color32 = Color32::from_rgb(0xe3, 0xe6, 0xf3);
pub const EDIT_BORDER: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
pub const TEXT: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const ERROR: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);

pub static SLICE_COLORS: Lazy<Vec<Color32>> = Lazy::new(|| {
    vec![
        Color32::from_rgb(63, 81, 181),  // Indigo
        Color32::from_rgb(255, 152, 0),  // Orange
        Color32::from_rgb(76, 175, 80),  // Green
        Color32::from_rgb(233, 30, 99),  // Pink
        Color32::from_rgb(0, 150, 136),  // Teal
        Color32::from_rgb(121, 85, 72),  // Brown
    ]
});

/// Colour for the `index`-th slice, cycling through the palette.
pub fn slice_color(index: usize) -> Color32 {
    SLICE_COLORS[index % SLICE_COLORS.len()]
}

/// Linear blend of two colours in sRGB space, `t` clamped to `0..=1`.
pub fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        lerp(from.r(), to.r()),
        lerp(from.g(), to.g()),
        lerp(from.b(), to.b()),
        lerp(from.a(), to.a()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_and_midpoint() {
        assert_eq!(mix(INDIGO_LIGHT, INDIGO, 0.0), INDIGO_LIGHT);
        assert_eq!(mix(INDIGO_LIGHT, INDIGO, 1.0), INDIGO);
        assert_eq!(
            mix(Color32::BLACK, Color32::WHITE, 0.5),
            Color32::from_rgb(128, 128, 128)
        );
        assert_eq!(mix(Color32::BLACK, Color32::WHITE, 7.0), Color32::WHITE);
    }

    #[test]
    fn slice_palette_cycles() {
        assert_eq!(slice_color(0), slice_color(SLICE_COLORS.len()));
    }
}
