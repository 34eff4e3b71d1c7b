use crate::core::domain::{
    error::{SdpError, SdpResult},
    value_object::{SdpPassword, SdpServer, SdpUsername},
};
use url::Url;

/// The fixed API version segment.
pub const API_VERSION: &str = "v2";

/// Where and as whom the client talks to an SDP array.
#[derive(Debug, Clone)]
pub struct SdpConnection {
    server: SdpServer,
    username: SdpUsername,
    password: SdpPassword,
    base_url: Url,
}

impl SdpConnection {
    /// Builds a connection to `https://{server}/api/v2`.
    ///
    /// # Errors
    /// Returns `SdpError::Configuration` if the server does not form a valid URL.
    pub fn new(server: SdpServer, username: SdpUsername, password: SdpPassword) -> SdpResult<Self> {
        let raw = format!("https://{}/api/{}", server.as_str(), API_VERSION);
        let base_url = Url::parse(&raw).map_err(|e| {
            SdpError::Configuration(format!("'{}' is not a valid server address: {}", server.as_str(), e))
        })?;
        Ok(Self {
            server,
            username,
            password,
            base_url,
        })
    }

    /// Builds a connection against an arbitrary base URL, e.g. a mock server.
    #[cfg(test)]
    pub(crate) fn with_base_url(
        server: SdpServer,
        username: SdpUsername,
        password: SdpPassword,
        base_url: Url,
    ) -> Self {
        Self {
            server,
            username,
            password,
            base_url,
        }
    }

    pub fn server(&self) -> &SdpServer {
        &self.server
    }

    pub fn username(&self) -> &SdpUsername {
        &self.username
    }

    pub fn password(&self) -> &SdpPassword {
        &self.password
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins a validated endpoint (leading `/`, optional query) onto the base URL.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), endpoint)
    }
}
