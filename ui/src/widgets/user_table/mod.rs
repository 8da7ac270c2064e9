//! Generic table over a [`TableViewModel`].
//!
//! - `columns`: column widths
//! - `header`: header row rendering
//! - `row`: row rendering
//! - `cells`: cell rendering per column kind

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use std::hash::Hash;

use egui::{Align, Layout, Response, Ui};
use egui_extras::TableBuilder;
use profiles_business::{ColumnSchema, TableViewModel};

use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::render_user_row;

/// Renders the header and one row per user. An empty model renders only the header.
///
/// `id_salt` keeps several tables on one screen apart.
pub fn user_table(
    ui: &mut Ui,
    id_salt: impl Hash,
    schema: &ColumnSchema,
    model: &TableViewModel<'_>,
) -> Response {
    ui.push_id(id_salt, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in table_columns(schema) {
            table = table.column(column);
        }
        table
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, model.headers());
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, model.rows.len(), |mut row| {
                    let view = &model.rows[row.index()];
                    render_user_row(&mut row, view);
                });
            });
    })
    .response
}

#[cfg(test)]
mod user_table_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use profiles_business::{DisplayUser, USER_COLUMNS};

    use super::*;

    fn users() -> Vec<DisplayUser> {
        vec![
            DisplayUser {
                id: "a1".to_string(),
                name: "Jane Doe".to_string(),
                email: "j@x.com".to_string(),
                phone: "555".to_string(),
                country: "US".to_string(),
                picture_url: "http://x/p.png".to_string(),
            },
            DisplayUser {
                id: "b2".to_string(),
                name: "Ola Nordmann".to_string(),
                email: "ola@x.no".to_string(),
                phone: "(0) 12 34".to_string(),
                country: "Norway".to_string(),
                picture_url: "http://x/q.png".to_string(),
            },
        ]
    }

    #[test]
    fn test_table_header_elements_exist() {
        let harness = Harness::new_ui(|ui| {
            let model = TableViewModel::build(&[], &USER_COLUMNS);
            user_table(ui, "empty", &USER_COLUMNS, &model);
        });

        for header in ["Avatar", "Name", "Email", "Phone", "Country"] {
            assert!(
                harness.query_by_label(header).is_some(),
                "{header} header should exist"
            );
        }
    }

    #[test]
    fn test_rows_render_field_values_verbatim() {
        let users = users();
        let harness = Harness::new_ui(move |ui| {
            let model = TableViewModel::build(&users, &USER_COLUMNS);
            user_table(ui, "rows", &USER_COLUMNS, &model);
        });

        for text in ["Jane Doe", "j@x.com", "555", "US", "Ola Nordmann", "(0) 12 34", "Norway"] {
            assert!(
                harness.query_by_label(text).is_some(),
                "{text} should be rendered"
            );
        }
    }

    #[test]
    fn test_two_tables_on_one_screen() {
        let users = users();
        let harness = Harness::new_ui(move |ui| {
            let model = TableViewModel::build(&users, &USER_COLUMNS);
            user_table(ui, "first", &USER_COLUMNS, &model);
            user_table(ui, "second", &USER_COLUMNS, &model);
        });

        assert_eq!(harness.query_all_by_label("Jane Doe").count(), 2);
    }
}
