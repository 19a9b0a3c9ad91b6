pub mod customer;
pub mod reservation;

use app_error::AppError;

/// A required form field: present and not blank. The value is kept as submitted.
pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::input_shape(format!("{field} is required"))),
    }
}

/// An optional form field; blank values are stored as absent.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
