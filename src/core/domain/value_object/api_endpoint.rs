use crate::core::domain::error::ValidationError;

/// Validates a raw API endpoint before it is appended to the base URL.
///
/// Endpoints must start with `/` and must not end with `/`, except for a
/// filter whose value is a path (`?host=/hosts/12` style queries end in `=/`).
pub(crate) fn validate_endpoint(endpoint: &str) -> Result<(), ValidationError> {
    if !endpoint.starts_with('/') {
        return Err(ValidationError::Format(format!(
            "The endpoint '{}' must start with '/'",
            endpoint
        )));
    }
    if endpoint.ends_with('/') && !endpoint.ends_with("=/") {
        return Err(ValidationError::Format(format!(
            "The endpoint '{}' must not end with '/'",
            endpoint
        )));
    }
    Ok(())
}
