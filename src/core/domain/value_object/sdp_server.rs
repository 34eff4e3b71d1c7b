use crate::core::domain::error::ValidationError;

/// The address of an SDP management endpoint (`host` or `host:port`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdpServer(String);

impl SdpServer {
    /// Creates a new server address without validation.
    pub(crate) fn new_unchecked(server: String) -> Self {
        Self(server)
    }

    /// Returns the server address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a server address. Schemes and paths are rejected; the
/// client always talks `https://{server}/api/v2`.
pub(crate) fn validate_server(server: &str) -> Result<(), ValidationError> {
    if server.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "server".to_string(),
            message: "Server cannot be empty".to_string(),
        });
    }
    if server.contains("://") {
        return Err(ValidationError::Format(format!(
            "Server '{}' must not include a scheme",
            server
        )));
    }
    if server.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(ValidationError::Format(format!(
            "Server '{}' must be a bare host or host:port",
            server
        )));
    }
    Ok(())
}
