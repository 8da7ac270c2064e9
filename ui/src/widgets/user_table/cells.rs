//! Cell rendering for the user table.

use egui::{Image, Ui, Vec2};

use super::columns::AVATAR_SIZE;

/// Renders a text cell. The value is shown as-is.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders a round avatar loaded from `src`.
///
/// While the image loads egui shows a spinner in its place; a failed load
/// shows the error glyph and keeps the row height.
#[inline]
pub fn render_avatar_cell(ui: &mut Ui, src: &str, alt: &str) {
    ui.centered_and_justified(|ui| {
        ui.add(
            Image::new(src)
                .fit_to_exact_size(Vec2::splat(AVATAR_SIZE))
                .corner_radius(AVATAR_SIZE / 2.0)
                .alt_text(alt),
        );
    });
}
