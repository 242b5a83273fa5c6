//! Startup font loading with fallback to egui's built-in fonts.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily, FontId, TextStyle};

use crate::error::{AppError, Result};

/// Read a font file and parse it with the same parser epaint uses. egui
/// panics on the first frame if installed font data does not parse.
pub fn load_font_file(path: &Path) -> Result<FontData> {
    let bytes = fs::read(path)?;
    if let Err(e) = ab_glyph::FontRef::try_from_slice_and_index(&bytes, 0) {
        log::debug!("{}: {e}", path.display());
        return Err(AppError::UnsupportedFont(path.display().to_string()));
    }
    Ok(FontData::from_owned(bytes))
}

/// Family name registered for the font: the file stem.
pub fn family_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "custom".to_string())
}

/// Default definitions with the font at `path` placed first for proportional
/// text and last for monospace.
pub fn font_definitions(path: &Path) -> Result<(String, FontDefinitions)> {
    let data = load_font_file(path)?;
    let family = family_name(path);

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(family.clone(), Arc::new(data));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, family.clone());
    fonts
        .families
        .entry(FontFamily::Monospace)
        .or_default()
        .push(family.clone());
    Ok((family, fonts))
}

/// Install the configured font, or keep the defaults if it cannot be loaded.
/// Returns whether the custom font was installed.
pub fn install_fonts(ctx: &egui::Context, path: &Path, size: f32) -> bool {
    let loaded = match font_definitions(path) {
        Ok((family, fonts)) => {
            ctx.set_fonts(fonts);
            log::info!("Loaded font: {family}");
            true
        }
        Err(e) => {
            log::warn!("Failed to load font. Falling back to default. ({e})");
            false
        }
    };
    apply_text_size(ctx, size);
    loaded
}

fn apply_text_size(ctx: &egui::Context, size: f32) {
    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(size));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(size));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::proportional(size - 3.0));
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(size + 5.0));
    });
}
