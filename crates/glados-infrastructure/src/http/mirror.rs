use log::{debug, warn};
use reqwest::header::{self, HeaderValue};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use glados_domain::shared::DomainError;

use super::endpoints::{extract_domain, EndpointConfig};
use super::transport::{HttpTransport, OutgoingRequest, TransportResponse};

/// Replays one request against each configured mirror in order until one
/// answers HTTP 200.
#[derive(Clone)]
pub struct MirrorRequester {
    transport: Arc<dyn HttpTransport>,
    config: Arc<EndpointConfig>,
    timeout: Duration,
}

impl MirrorRequester {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: Arc<EndpointConfig>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            config,
            timeout,
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Returns the first 200 response, or `Ok(None)` once every mirror has
    /// failed. Transport errors and non-200 statuses only move on to the next
    /// mirror; `Err` means the request itself could not be built (for
    /// example a cookie that is not a valid header value).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        cookie: &str,
        body: Option<&Value>,
    ) -> Result<Option<TransportResponse>, DomainError> {
        let cookie_value = HeaderValue::from_str(cookie).map_err(|e| {
            DomainError::InvalidInput(format!("Cookie is not a valid header value: {}", e))
        })?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| {
                DomainError::Infrastructure(format!("Failed to serialize request body: {}", e))
            })?;

        for base in self.config.mirrors() {
            let request = match self.prepare(base, &method, path, &cookie_value, body.clone()) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Skipping mirror {}: {}", base, e);
                    continue;
                }
            };

            match self.transport.execute(request).await {
                Ok(response) if response.is_ok() => {
                    debug!("{} {} answered by {}", method, path, base);
                    return Ok(Some(response));
                }
                Ok(response) => {
                    warn!(
                        "{} {} via {} returned status {}: {}",
                        method,
                        path,
                        base,
                        response.status,
                        &response.body[..floor_char_boundary(&response.body, 200)]
                    );
                }
                Err(e) => {
                    warn!("{} {} via {} failed: {:#}", method, path, base, e);
                }
            }
        }

        warn!("{} {}: no mirror answered", method, path);
        Ok(None)
    }

    fn prepare(
        &self,
        base: &str,
        method: &Method,
        path: &str,
        cookie: &HeaderValue,
        body: Option<String>,
    ) -> Result<OutgoingRequest, DomainError> {
        let origin = extract_domain(base)?;
        let referer = format!("{}{}", origin, self.config.referer_path());

        let mut headers = self.config.header_template().clone();
        headers.insert(header::ORIGIN, header_value(&origin)?);
        headers.insert(header::REFERER, header_value(&referer)?);
        headers.insert(header::COOKIE, cookie.clone());

        Ok(OutgoingRequest {
            method: method.clone(),
            url: format!("{}{}", base, path),
            headers,
            body,
            timeout: self.timeout,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, DomainError> {
    HeaderValue::from_str(value)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid header value '{}': {}", value, e)))
}

// Largest index <= max that does not split a UTF-8 sequence
fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut index = max;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
