//! Internal HTTP client that authenticates, paces and interprets every SDP call.

use crate::core::domain::{
    error::{SdpError, SdpResult},
    model::{
        list_response::{DeleteResponse, ListResponse},
        sdp_config::SdpConfig,
        sdp_connection::SdpConnection,
    },
    value_object::validate_endpoint,
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Internal HTTP client for the SDP REST API.
///
/// Every request carries a basic authentication header and a per-request
/// timeout. Bodies are JSON in both directions. Cloning is cheap: the
/// underlying connection pool, connection details and rate limiter are shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<SdpConnection>,
    timeout: Duration,
    page_size: u32,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Errors
    /// Returns `SdpError::Connection` if the HTTP client cannot be built.
    pub fn new(connection: SdpConnection, config: &SdpConfig) -> SdpResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| SdpError::Connection(e.to_string()))?;

        let rate_limiter = config.rate_limit.map(|rl| {
            let quota = Quota::per_second(rl.requests_per_second).allow_burst(rl.burst_size);
            Arc::new(DefaultDirectRateLimiter::direct(quota))
        });

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            timeout: config.timeout,
            page_size: config.page_size.max(1),
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &SdpConnection {
        &self.connection
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// A clone of this client whose requests use `timeout`.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    /// Performs a GET request and decodes the body into `T`.
    ///
    /// # Errors
    /// Returns `SdpError` if the request fails, the server reports an error,
    /// or the response cannot be decoded.
    pub async fn get<T>(&self, endpoint: &str) -> SdpResult<T>
    where
        T: DeserializeOwned,
    {
        let (_, value) = self.send(Method::GET, endpoint, None::<&()>).await?;
        decode(value)
    }

    /// Performs a POST request with a JSON body.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> SdpResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (_, value) = self.send(Method::POST, endpoint, Some(body)).await?;
        decode(value)
    }

    /// Performs a PATCH request with a JSON body.
    pub async fn patch<B, T>(&self, endpoint: &str, body: &B) -> SdpResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (_, value) = self.send(Method::PATCH, endpoint, Some(body)).await?;
        decode(value)
    }

    /// Performs a DELETE request. Success is reported with the HTTP status
    /// code, which is `204` for the SDP API.
    pub async fn delete(&self, endpoint: &str) -> SdpResult<DeleteResponse> {
        let (status, _) = self.send(Method::DELETE, endpoint, None::<&()>).await?;
        Ok(DeleteResponse {
            status_code: status.as_u16(),
        })
    }

    /// Collects every record of a list endpoint, following `limit`/`offset`
    /// pages until `total` hits are gathered or a page comes back empty.
    pub async fn list_all<T>(&self, endpoint: &str) -> SdpResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut hits = Vec::new();
        let mut offset: u64 = 0;
        loop {
            let page: ListResponse<T> = self.get(&paged(endpoint, self.page_size, offset)).await?;
            let received = page.hits.len() as u64;
            hits.extend(page.hits);
            if received == 0 || hits.len() as u64 >= page.total {
                break;
            }
            offset += received;
        }
        Ok(hits)
    }

    /// Core request execution. Validates the endpoint, waits on the rate
    /// limiter, sends the request and interprets the response.
    pub async fn send<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> SdpResult<(StatusCode, Value)>
    where
        B: Serialize + ?Sized,
    {
        validate_endpoint(endpoint)?;

        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = self.connection.endpoint_url(endpoint);
        debug!(%method, %url, "sending SDP request");

        let mut req_builder = self
            .http_client
            .request(method.clone(), &url)
            .basic_auth(
                self.connection.username().as_str(),
                Some(self.connection.password().as_str()),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(self.timeout);

        if let Some(body) = body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!(%method, %url, status = status.as_u16(), "received SDP response");

        let value = interpret_response(status, &bytes)?;
        Ok((status, value))
    }
}

fn transport_error(err: reqwest::Error) -> SdpError {
    if err.is_timeout() {
        SdpError::Timeout
    } else {
        SdpError::Connection(format!("HTTP request failed: {}", err))
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> SdpResult<T> {
    serde_json::from_value(value).map_err(|e| SdpError::Decode(e.to_string()))
}

/// Appends `limit`/`offset` to an endpoint that may already carry a query.
fn paged(endpoint: &str, limit: u32, offset: u64) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}limit={}&offset={}", endpoint, separator, limit, offset)
}

/// Builds `{endpoint}?{field}={value}` with the value percent-encoded.
pub(crate) fn filtered(endpoint: &str, field: &str, value: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
    format!("{}?{}={}", endpoint, field, encoded)
}

/// Turns a status and raw body into a JSON value or an error.
///
/// - a JSON object carrying `error_msg` is an API error whatever the status
/// - any other JSON is returned on 2xx and reported by status line otherwise
/// - an empty or non-JSON body becomes `{"status_code": 204}` on 204
pub(crate) fn interpret_response(status: StatusCode, body: &[u8]) -> SdpResult<Value> {
    let parsed = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<Value>(body).ok()
    };

    match parsed {
        Some(Value::Object(map)) if map.contains_key("error_msg") => {
            let message = match &map["error_msg"] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Err(SdpError::Api {
                status: status.as_u16(),
                message,
            })
        }
        Some(value) if status.is_success() => Ok(value),
        Some(_) => Err(SdpError::HttpStatus(status.to_string())),
        None if status == StatusCode::NO_CONTENT => Ok(json!({ "status_code": 204 })),
        None if status.is_success() => Err(SdpError::Decode(format!(
            "expected a JSON body with status {}",
            status
        ))),
        None => Err(SdpError::HttpStatus(status.to_string())),
    }
}
