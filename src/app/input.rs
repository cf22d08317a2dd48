//! Input line parsing and validation.

use crate::error_handling::InputError;
use crate::models::Method;

/// Returns `true` for lines that carry no record (blank or `#` comment).
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parses a `user_id,value` line into an uncommitted `Method`.
///
/// Everything after the first comma is the value, so values may contain commas.
/// Surrounding whitespace is trimmed from both fields.
///
/// # Errors
///
/// - `InputError::Malformed` if there is no comma
/// - `InputError::InvalidUserId` if the user id is not a positive integer
/// - `InputError::EmptyValue` if the value is empty
pub fn parse_method_line(line: &str) -> Result<Method, InputError> {
    let (user_id, value) = line
        .split_once(',')
        .ok_or_else(|| InputError::Malformed(line.trim().to_string()))?;

    let user_id = user_id.trim();
    let user_id = match user_id.parse::<u64>() {
        Ok(id) if id > 0 => id,
        _ => return Err(InputError::InvalidUserId(user_id.to_string())),
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::EmptyValue);
    }

    Ok(Method::new(user_id, value))
}
