pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod validation;

pub use app::{app, AppState};
