use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use std::time::Duration;

use super::endpoints::USER_AGENT;

/// Fully prepared request handed to a transport
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub timeout: Duration,
}

/// Status code and body text of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// One HTTP round trip. Errors are transport-level only (DNS, TLS,
/// timeout, unreadable body); any status code is a successful exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: OutgoingRequest) -> Result<TransportResponse>;
}

/// reqwest-backed transport; the inner client is shared for connection
/// pooling across every call of a run.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        // No cookie store: each request carries its own account cookie and
        // nothing may leak between accounts.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutgoingRequest) -> Result<TransportResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers)
            .timeout(request.timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("Failed to send {} {}", request.method, request.url))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {}", request.url))?;

        Ok(TransportResponse { status, body })
    }
}
