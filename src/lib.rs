pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;

pub use routes::{AppState, router};

rust_i18n::i18n!("locales", fallback = "ru");
