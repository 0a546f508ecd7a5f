//! Headless controller for the site's contact form.
//!
//! The controller owns the form state and reacts to [`FormEvent`]s delivered by
//! whatever hosts the page. Page-level capabilities (analytics, the office
//! map) are injected as traits with no-op defaults.

mod analytics;
mod controller;
mod field;
pub mod map;
pub mod mask;
pub mod navigation;
mod transport;
pub mod validation;

pub use analytics::*;
pub use controller::*;
pub use field::*;
pub use transport::*;

rust_i18n::i18n!("locales", fallback = "ru");

/// Default locale for user-facing messages.
pub const DEFAULT_LOCALE: &str = "ru";
