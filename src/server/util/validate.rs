//! Field validation used when turning request DTOs into service parameters.

use crate::server::error::AppError;

/// Trims a required text field, rejecting blank values.
pub fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    Ok(trimmed.to_string())
}

/// Trims an optional text field, treating blank values as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks that an optional number lies within `min..=max`.
pub fn in_range<T>(field: &str, value: Option<T>, min: T, max: T) -> Result<Option<T>, AppError>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    match value {
        Some(v) if v < min || v > max => Err(AppError::BadRequest(format!(
            "{} must be between {} and {}",
            field, min, max
        ))),
        other => Ok(other),
    }
}

/// Validates the new value of a required field in a partial update.
pub fn required_update(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    value.map(|v| required(field, v)).transpose()
}
