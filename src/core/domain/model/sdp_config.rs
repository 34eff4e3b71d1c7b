use crate::core::application::executor::FailurePolicy;
use std::{num::NonZeroU32, time::Duration};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default number of records requested per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Request pacing applied before every HTTP call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: NonZeroU32,
    pub burst_size: NonZeroU32,
}

impl RateLimitConfig {
    /// A limit of `n` requests per second with a burst of `n`.
    pub fn per_second(n: NonZeroU32) -> Self {
        Self {
            requests_per_second: n,
            burst_size: n,
        }
    }
}

/// Client behaviour settings. Immutable once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdpConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Skip TLS certificate verification. On by default; arrays ship self-signed certificates.
    pub accept_invalid_certs: bool,
    /// Optional request pacing.
    pub rate_limit: Option<RateLimitConfig>,
    /// Records requested per page when listing.
    pub page_size: u32,
    /// How the volume delete cascade treats a failed mapping cleanup.
    pub volume_cleanup: FailurePolicy,
}

impl Default for SdpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: true,
            rate_limit: None,
            page_size: DEFAULT_PAGE_SIZE,
            volume_cleanup: FailurePolicy::Continue,
        }
    }
}
