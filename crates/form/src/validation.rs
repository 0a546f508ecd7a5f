//! Per-field checks run before anything leaves the browser.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Field, FieldKind};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("valid phone pattern"));

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Checks one text control and returns the locale key of the first failure.
///
/// Format checks only run on non-empty values; an empty optional field is
/// always valid.
pub fn check(field: &Field) -> Result<(), &'static str> {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required {
            Err("form.required")
        } else {
            Ok(())
        };
    }

    match field.name.kind() {
        FieldKind::Email if !EMAIL.is_match(value) => Err("form.invalid_email"),
        FieldKind::Tel if !is_phone(value) => Err("form.invalid_phone"),
        FieldKind::Text if value.chars().count() < NAME_MIN_CHARS => Err("form.name_too_short"),
        FieldKind::TextArea if value.chars().count() < MESSAGE_MIN_CHARS => {
            Err("form.message_too_short")
        }
        _ => Ok(()),
    }
}

/// Digits and phone punctuation, at least ten characters once spaces are gone.
pub fn is_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    PHONE.is_match(&compact)
}

/// Translated message for a locale key returned by [`check`].
pub fn message(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}
