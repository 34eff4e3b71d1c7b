//! An async client for the Silk Cloud Data Platform (SDP) REST API.
//!
//! The SDP API addresses every object by a server-assigned numeric id. This
//! crate lets callers address volumes, hosts, groups and policies by name,
//! resolves those names with fresh listings, and runs the multi-call
//! sequences (cascading deletes, group fan-out mappings) that the API leaves
//! to the client.

mod core;
mod resources;


use crate::core::{
    domain::value_object::{
        validate_password, validate_server, validate_username,
    },
    infrastructure::api_client::ApiClient,
};
use reqwest::Method;
use serde_json::Value;
use std::{fmt, time::Duration};

pub use crate::core::{
    application::executor::{FailurePolicy, SequentialExecutor},
    domain::{
        error::{SdpError, SdpResult, ValidationError},
        model::{
            capacity_policy::{
                CAPACITY_POLICY_UPDATE_KEYS, CapacityPolicy, CreateCapacityPolicyParams,
            },
            host::{HOST_UPDATE_KEYS, Host, HostType},
            host_group::{HOST_GROUP_UPDATE_KEYS, HostGroup},
            host_port::{HostIqn, HostPwwn},
            list_response::{DeleteResponse, ListResponse},
            mapping::Mapping,
            named_resource::NamedResource,
            resource_kind::ResourceKind,
            retention_policy::{
                CreateRetentionPolicyParams, RETENTION_POLICY_UPDATE_KEYS, RetentionPolicy,
            },
            sdp_config::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, RateLimitConfig, SdpConfig},
            sdp_connection::{API_VERSION, SdpConnection},
            snapshot::Snapshot,
            update_config::UpdateConfig,
            volume::{CreateVolumeParams, VOLUME_UPDATE_KEYS, Volume},
            volume_group::{CreateVolumeGroupParams, VOLUME_GROUP_UPDATE_KEYS, VolumeGroup},
        },
        value_object::{ObjectRef, SdpPassword, SdpServer, SdpUsername},
    },
};

/// Environment variable holding the array address.
pub const ENV_SERVER: &str = "SILK_SDP_SERVER";
/// Environment variable holding the account name.
pub const ENV_USERNAME: &str = "SILK_SDP_USERNAME";
/// Environment variable holding the account password.
pub const ENV_PASSWORD: &str = "SILK_SDP_PASSWORD";
/// Optional environment variable overriding the timeout, in seconds.
pub const ENV_TIMEOUT: &str = "SILK_SDP_TIMEOUT";

/// A client for one Silk SDP array.
///
/// Calls are name-addressed; every name is resolved with a fresh listing, so
/// the client holds no state beyond its immutable connection settings.
/// Multi-call operations await each remote call before issuing the next.
///
/// # Examples
///
/// ```no_run
/// use silk_sdp::{CreateVolumeParams, HostType, SdpClient, SdpResult};
///
/// #[tokio::main]
/// async fn main() -> SdpResult<()> {
///     let client = SdpClient::builder()
///         .server("10.0.0.5")
///         .credentials("admin", "secret")
///         .build()?;
///
///     client.create_host("db01", HostType::Linux).await?;
///     client
///         .create_volume(CreateVolumeParams::new("db01-data", 100, "databases"))
///         .await?;
///     client.create_host_volume_mapping("db01", "db01-data").await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SdpClient {
    pub(crate) api_client: ApiClient,
    pub(crate) config: SdpConfig,
}

/// Builder for [`SdpClient`] configuration
#[derive(Default)]
pub struct SdpClientBuilder {
    server: Option<String>,
    username: Option<String>,
    password: Option<String>,
    config: SdpConfig,
}

impl fmt::Debug for SdpClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdpClientBuilder")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("config", &self.config)
            .finish()
    }
}

impl SdpClientBuilder {
    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Per-request timeout. Defaults to 15 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Whether to skip TLS certificate verification. Defaults to `true`.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Paces requests with a token bucket.
    pub fn rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(rate_limit);
        self
    }

    /// Records requested per list page. Defaults to 1000.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// How `delete_volume` treats a failure while removing the volume's
    /// mappings. Defaults to [`FailurePolicy::Continue`].
    pub fn volume_cleanup(mut self, policy: FailurePolicy) -> Self {
        self.config.volume_cleanup = policy;
        self
    }

    /// Reads the connection from `SILK_SDP_SERVER`, `SILK_SDP_USERNAME`
    /// and `SILK_SDP_PASSWORD`, loading a `.env` file first if present.
    ///
    /// # Errors
    /// Returns `SdpError::Configuration` naming the first variable that is
    /// missing, or when `SILK_SDP_TIMEOUT` is not a positive integer.
    pub fn from_env() -> SdpResult<Self> {
        // A missing .env file is not an error; the variables may come from the process.
        let _ = dotenvy::dotenv();

        let mut builder = Self::default()
            .server(required_env(ENV_SERVER)?)
            .credentials(required_env(ENV_USERNAME)?, required_env(ENV_PASSWORD)?);

        if let Ok(raw) = std::env::var(ENV_TIMEOUT) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    SdpError::Configuration(format!(
                        "The `{}` environment variable must be a positive number of seconds, got '{}'",
                        ENV_TIMEOUT, raw
                    ))
                })?;
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        Ok(builder)
    }

    /// Validates the settings and builds the client.
    ///
    /// # Errors
    /// Returns `SdpError::Validation` for a missing or malformed server,
    /// username or password.
    pub fn build(self) -> SdpResult<SdpClient> {
        let server = required_field(self.server, "server", "Server is required")?;
        validate_server(&server)?;
        let username = required_field(self.username, "username", "Username is required")?;
        validate_username(&username)?;
        let password = required_field(self.password, "password", "Password is required")?;
        validate_password(&password)?;

        let connection = SdpConnection::new(
            SdpServer::new_unchecked(server),
            SdpUsername::new_unchecked(username),
            SdpPassword::new_unchecked(password),
        )?;
        let api_client = ApiClient::new(connection, &self.config)?;

        Ok(SdpClient {
            api_client,
            config: self.config,
        })
    }
}

fn required_env(name: &str) -> SdpResult<String> {
    std::env::var(name).map_err(|_| {
        SdpError::Configuration(format!("The `{}` environment variable is not present", name))
    })
}

fn required_field(value: Option<String>, field: &str, message: &str) -> SdpResult<String> {
    value.ok_or_else(|| {
        SdpError::Validation(ValidationError::Field {
            field: field.to_string(),
            message: message.to_string(),
        })
    })
}

impl SdpClient {
    /// Creates a new builder for SdpClient configuration
    pub fn builder() -> SdpClientBuilder {
        SdpClientBuilder::default()
    }

    /// Builds a client with explicit credentials and default settings.
    pub fn connect(
        server: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> SdpResult<Self> {
        Self::builder()
            .server(server)
            .credentials(username, password)
            .build()
    }

    /// Builds a client from the `SILK_SDP_*` environment variables.
    pub fn from_env() -> SdpResult<Self> {
        SdpClientBuilder::from_env()?.build()
    }

    pub fn config(&self) -> &SdpConfig {
        &self.config
    }

    pub fn connection(&self) -> &SdpConnection {
        self.api_client.connection()
    }

    /// Returns a copy of this client whose calls use `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            api_client: self.api_client.with_timeout(timeout),
            config: SdpConfig {
                timeout,
                ..self.config.clone()
            },
        }
    }

    /// Sends a GET to any endpoint and returns the decoded JSON.
    ///
    /// # Errors
    /// The endpoint must start with `/` and must not end with `/` (unless it
    /// ends in `=/`); otherwise `SdpError::Validation` is returned without a
    /// request being made.
    pub async fn get_raw(&self, endpoint: &str) -> SdpResult<Value> {
        self.raw(Method::GET, endpoint, None).await
    }

    pub async fn post_raw(&self, endpoint: &str, body: &Value) -> SdpResult<Value> {
        self.raw(Method::POST, endpoint, Some(body)).await
    }

    pub async fn patch_raw(&self, endpoint: &str, body: &Value) -> SdpResult<Value> {
        self.raw(Method::PATCH, endpoint, Some(body)).await
    }

    /// Sends a DELETE. A `204 No Content` answer is returned as
    /// `{"status_code": 204}`.
    pub async fn delete_raw(&self, endpoint: &str) -> SdpResult<Value> {
        self.raw(Method::DELETE, endpoint, None).await
    }

    async fn raw(&self, method: Method, endpoint: &str, body: Option<&Value>) -> SdpResult<Value> {
        let (_, value) = self.api_client.send(method, endpoint, body).await?;
        Ok(value)
    }
}
