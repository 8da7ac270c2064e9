//! Column widths for the user table.

use egui_extras::Column;
use profiles_business::{CellKind, ColumnSchema};

/// Avatars are drawn as 40x40 circles.
pub const AVATAR_SIZE: f32 = 40.0;
pub const AVATAR_WIDTH: f32 = 60.0;
pub const TEXT_MIN_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 48.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// One `Column` per schema entry, in schema order.
///
/// Avatar columns are fixed, text columns size to content and the last column
/// takes whatever space is left.
pub fn table_columns(schema: &ColumnSchema) -> Vec<Column> {
    let last = schema.len().saturating_sub(1);
    schema
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| match column.cell {
            CellKind::Avatar => Column::exact(AVATAR_WIDTH),
            CellKind::Text if index == last => Column::remainder().at_least(TEXT_MIN_WIDTH),
            CellKind::Text => Column::auto().at_least(TEXT_MIN_WIDTH).resizable(true),
        })
        .collect()
}
