//! One titled table section fed by a [`SourceView`].

use egui::{Color32, Response, Ui};
use profiles_business::{SourceView, TableViewModel, USER_COLUMNS};

use super::user_table::user_table;

/// Placeholder shown while the cached query has nothing yet.
pub const LOADING_TEXT: &str = "Loading users...";

pub fn error_text(message: &str) -> String {
    format!("Failed to load users: {message}")
}

/// Renders the table for `view`, or the loading/error placeholder instead of it.
pub fn users_section(ui: &mut Ui, id_salt: &str, view: SourceView<'_>) -> Response {
    ui.vertical(|ui| match view {
        SourceView::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(LOADING_TEXT);
            });
        }
        SourceView::Error(message) => {
            ui.colored_label(Color32::RED, error_text(message));
        }
        SourceView::Ready(users) => {
            let model = TableViewModel::build(users, &USER_COLUMNS);
            user_table(ui, id_salt, &USER_COLUMNS, &model);
        }
    })
    .response
}

#[cfg(test)]
mod users_section_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use profiles_business::DisplayUser;

    use super::*;

    #[test]
    fn test_loading_placeholder_replaces_table() {
        let harness = Harness::new_ui(|ui| {
            users_section(ui, "loading", SourceView::Loading);
        });

        assert!(harness.query_by_label(LOADING_TEXT).is_some());
        assert!(harness.query_by_label("Email").is_none());
    }

    #[test]
    fn test_error_placeholder_shows_message() {
        let harness = Harness::new_ui(|ui| {
            users_section(ui, "error", SourceView::Error("network failure: timeout"));
        });

        assert!(
            harness
                .query_by_label("Failed to load users: network failure: timeout")
                .is_some()
        );
        assert!(harness.query_by_label("Email").is_none());
    }

    #[test]
    fn test_ready_with_no_users_shows_headers_only() {
        let harness = Harness::new_ui(|ui| {
            users_section(ui, "empty", SourceView::Ready(&[]));
        });

        assert!(harness.query_by_label("Email").is_some());
        assert!(harness.query_by_label(LOADING_TEXT).is_none());
    }

    #[test]
    fn test_ready_renders_rows() {
        let users = vec![DisplayUser {
            id: "a1".to_string(),
            name: "Jane Doe".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            country: "US".to_string(),
            picture_url: "http://x/p.png".to_string(),
        }];
        let harness = Harness::new_ui(move |ui| {
            users_section(ui, "ready", SourceView::Ready(&users));
        });

        assert!(harness.query_by_label("Jane Doe").is_some());
        assert!(harness.query_by_label("j@x.com").is_some());
    }
}
