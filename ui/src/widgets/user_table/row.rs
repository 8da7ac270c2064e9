//! Row rendering for the user table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use profiles_business::{CellContent, RowView};

use super::cells::{render_avatar_cell, render_text_cell};

/// Renders one row, one column per cell.
///
/// Every cell is scoped under its cell id so widget state survives the
/// batch being republished.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, view: &RowView<'_>) {
    for cell in &view.cells {
        row.col(|ui| {
            ui.push_id(cell.id.as_str(), |ui| match cell.content {
                CellContent::Avatar { src, alt } => render_avatar_cell(ui, src, alt),
                CellContent::Text(text) => render_text_cell(ui, text),
            });
            draw_cell_bottom_border(ui);
        });
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
