//! Table header rendering for the user table.

use egui::Ui;
use egui_extras::TableRow;
use profiles_business::HeaderView;

/// Renders the table header with centered, bold labels.
#[inline]
pub fn render_table_header<'h>(
    header: &mut TableRow<'_, '_>,
    headers: impl IntoIterator<Item = &'h HeaderView>,
) {
    for view in headers {
        header.col(|ui| {
            ui.push_id(view.id, |ui| render_header_cell(ui, view.label));
        });
    }
}

/// Renders a single header cell with centered, bold text.
#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}
