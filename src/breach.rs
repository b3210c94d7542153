//! Breach lookup client
//!
//! Queries the Have I Been Pwned password corpus with a k-anonymity range
//! query: only the first 5 characters of the password's SHA-1 digest are
//! sent, the server answers with every suffix sharing that prefix, and the
//! match is decided locally.

use secrecy::SecretString;
use thiserror::Error;

use crate::digest::{sha1_hex_upper, split_digest};
use crate::transport::{HttpTransport, RangeTransport, TransportError};
use crate::types::BreachResult;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Failures internal to a lookup. Never escapes the client: every variant
/// is folded into `BreachResult::LookupFailed` at the public boundary.
#[derive(Debug, Error)]
enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed range response")]
    MalformedBody,
    #[error("invalid occurrence count: {0}")]
    InvalidCount(String),
}

/// Client for the breach corpus range API.
///
/// Generic over the transport so tests can inject a deterministic fake
/// instead of performing real network I/O.
pub struct BreachClient<T = HttpTransport> {
    transport: T,
}

impl BreachClient<HttpTransport> {
    /// Client over the default HTTP transport.
    pub fn new() -> Self {
        Self {
            transport: HttpTransport::new(),
        }
    }
}

impl Default for BreachClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RangeTransport> BreachClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Checks the password against the breach corpus.
    ///
    /// Performs one outbound range query. Never raises to the caller:
    /// transport failures, non-2xx statuses and malformed bodies all
    /// resolve to `BreachResult::LookupFailed`.
    pub fn check(&self, password: &SecretString) -> BreachResult {
        match self.lookup(password) {
            Ok(result) => result,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup failed: {}", e);
                BreachResult::LookupFailed(e.to_string())
            }
        }
    }

    fn lookup(&self, password: &SecretString) -> Result<BreachResult, LookupError> {
        let digest = sha1_hex_upper(password);
        let (prefix, suffix) = split_digest(&digest);

        let response = self.transport.fetch_range(prefix)?;
        if !(200..300).contains(&response.status) {
            return Err(LookupError::Status(response.status));
        }

        scan_range(&response.body, suffix)
    }
}

/// Scans a range body for the computed digest suffix.
///
/// Each non-empty line is split at the first `:` into a `(suffix, count)`
/// pair and the suffix field compared for exact equality. Empty lines are
/// skipped; a non-empty line without a separator makes the body malformed.
fn scan_range(body: &str, suffix: &str) -> Result<BreachResult, LookupError> {
    for line in body.lines() {
        let line = line.trim_end(); // tolerate stray trailing whitespace
        if line.is_empty() {
            continue;
        }
        let (candidate, count) = line.split_once(':').ok_or(LookupError::MalformedBody)?;
        if candidate == suffix {
            let count = count
                .trim()
                .parse::<u64>()
                .map_err(|_| LookupError::InvalidCount(count.to_string()))?;
            return Ok(BreachResult::Found(count));
        }
    }
    Ok(BreachResult::NotFound)
}

/// Checks the password against the breach corpus over the default transport.
pub fn check_password_breach(password: &SecretString) -> BreachResult {
    BreachClient::new().check(password)
}

/// Async version that sends the lookup result via channel.
///
/// The cancellation token is checked before the network call is issued; a
/// cancellation arriving while the request is in flight is bounded by the
/// transport timeout.
#[cfg(feature = "async")]
pub async fn check_password_breach_tx<T>(
    client: BreachClient<T>,
    password: SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<BreachResult>,
) where
    T: RangeTransport + Send + 'static,
{
    #[cfg(feature = "tracing")]
    tracing::info!("breach lookup is about to start...");

    let result = if token.is_cancelled() {
        BreachResult::LookupFailed("breach lookup cancelled".to_string())
    } else {
        tokio::task::spawn_blocking(move || client.check(&password))
            .await
            .unwrap_or_else(|_| {
                BreachResult::LookupFailed("breach lookup task failed".to_string())
            })
    };

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send breach lookup result: {}", _e);
    }
}
