#![warn(clippy::all, rust_2018_idioms)]
//! egui front end that shows randomuser.me profiles in a table.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::ProfilesApp;
