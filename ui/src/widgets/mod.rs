pub mod user_table;
mod users_section;

pub use user_table::user_table;
pub use users_section::{LOADING_TEXT, error_text, users_section};
