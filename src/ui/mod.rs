//! Presentation layer: a ratatui game view for playing against the computer,
//! and a plain line-oriented driver.

mod app;
mod game_view;
pub mod plain;

pub use app::App;
