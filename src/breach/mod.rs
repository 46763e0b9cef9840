// src/breach/mod.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Range-query endpoint of the Pwned Passwords API.
pub const DEFAULT_ENDPOINT: &str = "https://api.pwnedpasswords.com";

/// Request timeout for a single range query.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("password is empty")]
    EmptyInput,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("malformed response record: {0}")]
    Parse(String),
}

/// Exposure count on success; zero means the password was not found in any
/// known breach corpus and is a valid, non-error outcome.
pub type BreachResult = std::result::Result<u64, BreachError>;

/// k-anonymity breach lookup client.
///
/// Only the first five hex characters of the SHA-1 digest ever go over the
/// wire; the password and its full hash never leave the process. The core
/// performs no retries; retry policy belongs to the caller.
pub struct BreachChecker {
    client: reqwest::Client,
    endpoint: String,
}

impl BreachChecker {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BreachError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub async fn check(&self, password: &str) -> BreachResult {
        if password.is_empty() {
            return Err(BreachError::EmptyInput);
        }

        let hash = hex::encode_upper(Sha1::digest(password.as_bytes()));
        let (prefix, suffix) = hash.split_at(5);

        debug!("querying breach range for prefix {}", prefix);
        let url = format!("{}/range/{}", self.endpoint, prefix);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BreachError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("breach range query for prefix {} returned {}", prefix, status);
            return Err(BreachError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BreachError::Transport(e.to_string()))?;

        // Newline-delimited SUFFIX:COUNT records; a scan with no match is a
        // clean zero, a malformed record is a protocol failure.
        for line in body.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (candidate, count) = line
                .split_once(':')
                .ok_or_else(|| BreachError::Parse("record is missing ':'".to_string()))?;
            let count: u64 = count
                .trim()
                .parse()
                .map_err(|_| BreachError::Parse("record count is not numeric".to_string()))?;
            if candidate.eq_ignore_ascii_case(suffix) {
                return Ok(count);
            }
        }

        Ok(0)
    }
}

/// One logical slot of breach results with supersede semantics.
///
/// Each call takes a fresh ticket; when the network round-trip finishes, the
/// result is only surfaced if no newer check was started for this slot in
/// the meantime. A stale result can therefore never overwrite a fresher one.
#[derive(Clone, Default)]
pub struct BreachSlot {
    latest: Arc<AtomicU64>,
}

impl BreachSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a check for this slot. Returns `None` when the result was
    /// superseded by a newer check and must be ignored.
    pub async fn check_latest(
        &self,
        checker: &BreachChecker,
        password: &str,
    ) -> Option<BreachResult> {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let result = checker.check(password).await;
        if self.latest.load(Ordering::SeqCst) == ticket {
            Some(result)
        } else {
            debug!("discarding superseded breach result (ticket {})", ticket);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_input_fails_before_any_network_io() {
        // Endpoint is unroutable on purpose; the empty check must not touch it.
        let checker =
            BreachChecker::new("http://127.0.0.1:1", Duration::from_millis(100)).unwrap();
        assert!(matches!(checker.check("").await, Err(BreachError::EmptyInput)));
    }

    #[test]
    fn prefix_split_matches_protocol() {
        let hash = hex::encode_upper(Sha1::digest(b"password"));
        assert_eq!(hash.len(), 40);
        let (prefix, suffix) = hash.split_at(5);
        // Well-known SHA-1 of "password".
        assert_eq!(prefix, "5BAA6");
        assert_eq!(suffix, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }
}
