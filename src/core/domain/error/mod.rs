use crate::core::domain::model::resource_kind::ResourceKind;
use thiserror::Error;

/// The main error type for Silk SDP operations.
///
/// Every public operation returns either a populated result or exactly one
/// of these. Orchestrated operations (cascading deletes, fan-out mappings)
/// report the first failing step through [`SdpError::StepFailed`]; side
/// effects of the steps that completed before it are not undone.
#[derive(Error, Debug)]
pub enum SdpError {
    /// A required connection setting is missing or malformed.
    ///
    /// # Fields
    /// * `0` - A description of the missing or malformed setting
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller input was rejected before any network call was made.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Name resolution scanned the full list and found no exact match.
    #[error("the server does not contain a {kind} named '{name}'")]
    NameNotFound { kind: ResourceKind, name: String },

    /// Reverse resolution found no record with the given identifier.
    #[error("the server does not contain a {kind} with the ID of '{id}'")]
    IdNotFound { kind: ResourceKind, id: i64 },

    /// A specific relationship (mapping, IQN, PWWN, group member) was not found.
    #[error("{0}")]
    NotFound(String),

    /// The host belongs to a host group and can only be mapped through it.
    #[error("Host '{host}' is a member of a Host Group and can not individually be mapped to a volume")]
    HostInGroup { host: String },

    /// The request did not complete within the configured timeout.
    #[error("Unable to establish a connection to the Silk SDP server")]
    Timeout,

    /// Network level failure (DNS, TLS, connection reset, client setup).
    ///
    /// # Fields
    /// * `0` - A description of what went wrong
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server answered with an `error_msg` payload.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The server answered with a non-success status and no usable body.
    ///
    /// # Fields
    /// * `0` - The raw HTTP status line, e.g. `404 Not Found`
    #[error("{0}")]
    HttpStatus(String),

    /// The payload could not be decoded into the expected record.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// One step of a multi-call sequence failed; later steps were not run.
    #[error("{operation}: failed to {step}: {source}")]
    StepFailed {
        operation: String,
        step: String,
        #[source]
        source: Box<SdpError>,
    },
}

impl SdpError {
    /// Returns the innermost error when this is a [`SdpError::StepFailed`] chain.
    pub fn root_cause(&self) -> &SdpError {
        match self {
            SdpError::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    ///
    /// # Fields
    /// * `0` - Description of the format violation
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    ///
    /// # Fields
    /// * `0` - Description of the constraint violation
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),

    /// An update config carried keys outside the resource's allow-list.
    #[error(
        "The provided config for {resource} contains invalid keys ({}). Valid choices are: {}",
        .invalid.join(", "),
        .allowed.join(", ")
    )]
    InvalidUpdateKeys {
        resource: ResourceKind,
        invalid: Vec<String>,
        allowed: Vec<String>,
    },
}

/// Type alias for Results that may fail with a SdpError
pub type SdpResult<T> = Result<T, SdpError>;
