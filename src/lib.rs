pub mod app;
pub mod cli;
pub mod config;
pub mod events;
pub mod keyboard;
pub mod mail;
pub mod theme;
pub mod ui;

pub use app::App;
