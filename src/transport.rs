//! Range query transport
//!
//! The breach client depends on a transport capability rather than on a
//! concrete HTTP stack, so tests can substitute a deterministic fake.

use std::time::Duration;
use thiserror::Error;

const RANGE_ENDPOINT: &str = "https://api.pwnedpasswords.com/range";

/// Bounded default timeout for the range query. Not overridable.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport-level failure: network unreachable, DNS, connection reset.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Raw response of a range query, before interpretation.
#[derive(Debug, Clone)]
pub struct RangeResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to fetch the breach corpus range for a digest prefix.
pub trait RangeTransport {
    /// Fetches all known suffixes sharing `prefix` (5 uppercase hex chars).
    ///
    /// Only the prefix crosses the network boundary. Status interpretation
    /// is left to the caller.
    fn fetch_range(&self, prefix: &str) -> Result<RangeResponse, TransportError>;
}

/// Default transport: sync HTTP via ureq (no async runtime needed).
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new() -> Self {
        let agent = ureq::config::Config::builder()
            .http_status_as_error(false) // non-2xx handled by the client
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeTransport for HttpTransport {
    fn fetch_range(&self, prefix: &str) -> Result<RangeResponse, TransportError> {
        let url = format!("{RANGE_ENDPOINT}/{prefix}");
        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(RangeResponse { status, body })
    }
}
