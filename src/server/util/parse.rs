use uuid::Uuid;

use crate::server::error::{validation::ValidationError, AppError};

/// Parses a public id from a path segment.
///
/// # Arguments
/// - `kind` - Kind of resource the id refers to, used in the error message
/// - `value` - The string to attempt to parse into a `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed public id
/// - `Err(AppError::ValidationErr(InvalidPublicId))` - The string is not a valid UUID
pub fn parse_public_id(kind: &'static str, value: &str) -> Result<Uuid, AppError> {
    let result = Uuid::parse_str(value).map_err(|e| ValidationError::InvalidPublicId {
        kind,
        value: value.to_string(),
        source: e,
    })?;

    Ok(result)
}

/// Rejects empty or whitespace-only text fields.
///
/// # Returns
/// - `Ok(String)` - The value with surrounding whitespace trimmed
/// - `Err(AppError::ValidationErr(EmptyField))` - Nothing left after trimming
pub fn require_text(field: &'static str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field).into());
    }

    Ok(trimmed.to_string())
}
