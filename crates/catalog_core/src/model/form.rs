//! Form sanitization and field-level validation helpers.
//!
//! Free-text input is trimmed, then markup-significant characters are
//! escaped to HTML entities. Validation always runs on the sanitized value,
//! so a stored name never exceeds its limit after escaping.

use serde::Serialize;

/// Maximum stored length of a category or item name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// One rejected form field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name as submitted (`name`, `price`, `category`, ...).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Trims surrounding whitespace and escapes `& < > " ' /`.
pub fn sanitize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut escaped = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Case-folds a sanitized name into its uniqueness key.
///
/// Two names denote the same record when their keys are equal. Applies full
/// Unicode case folding, so `Straße` and `STRASSE` share a key.
pub fn fold_name(name: &str) -> String {
    caseless::default_case_fold_str(name)
}

/// Pushes an error when a sanitized value is empty.
pub(crate) fn require_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &str,
) {
    if value.is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// Pushes an error when a sanitized name exceeds [`NAME_MAX_CHARS`].
pub(crate) fn limit_name(errors: &mut Vec<FieldError>, value: &str) {
    if value.chars().count() > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at most {NAME_MAX_CHARS} characters."),
        ));
    }
}
