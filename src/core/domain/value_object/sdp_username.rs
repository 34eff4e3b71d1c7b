use crate::core::domain::error::ValidationError;

/// An SDP account name used for basic authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdpUsername(String);

impl SdpUsername {
    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a username. Basic auth forbids ':' in the user part.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    if username.contains(':') {
        return Err(ValidationError::Format(
            "Username cannot contain ':'".to_string(),
        ));
    }
    Ok(())
}
