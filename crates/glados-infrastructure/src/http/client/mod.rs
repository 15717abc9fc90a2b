mod account_info;
mod check_in;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use glados_domain::check_in::CheckInGateway;
use glados_domain::credential::Credential;
use glados_domain::shared::DomainError;

use super::endpoints::EndpointConfig;
use super::mirror::MirrorRequester;
use super::transport::HttpTransport;

/// GLaDOS account API reached through the mirror list
pub struct GladosClient {
    pub(super) requester: MirrorRequester,
}

impl GladosClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        config: Arc<EndpointConfig>,
        timeout: Duration,
    ) -> Self {
        Self {
            requester: MirrorRequester::new(transport, config, timeout),
        }
    }
}

#[async_trait]
impl CheckInGateway for GladosClient {
    async fn check_in(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.post_check_in(credential).await
    }

    async fn fetch_status(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.get_status(credential).await
    }

    async fn fetch_points(&self, credential: &Credential) -> Result<Option<String>, DomainError> {
        self.get_points(credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockHttpTransport, TransportResponse};
    use reqwest::Method;

    fn client(transport: MockHttpTransport) -> GladosClient {
        GladosClient::new(
            Arc::new(transport),
            Arc::new(EndpointConfig::new(["https://glados.example"]).unwrap()),
            Duration::from_secs(10),
        )
    }

    #[tokio::test]
    async fn test_check_in_posts_token_payload() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|req| {
                req.method == Method::POST
                    && req.url == "https://glados.example/api/user/checkin"
                    && req.body.as_deref() == Some(r#"{"token":"glados.cloud"}"#)
            })
            .times(1)
            .returning(|_| {
                Ok(TransportResponse {
                    status: 200,
                    body: r#"{"code":1,"message":"Please Try Tomorrow"}"#.to_string(),
                })
            });

        let credential = Credential::new("koa:sess=abc").unwrap();
        let body = client(transport).check_in(&credential).await.unwrap();
        assert_eq!(
            body.as_deref(),
            Some(r#"{"code":1,"message":"Please Try Tomorrow"}"#)
        );
    }

    #[tokio::test]
    async fn test_status_and_points_are_plain_gets() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .withf(|req| req.method == Method::GET && req.body.is_none())
            .times(2)
            .returning(|req| {
                Ok(TransportResponse {
                    status: 200,
                    body: req.url.clone(),
                })
            });

        let credential = Credential::new("koa:sess=abc").unwrap();
        let client = client(transport);

        let status = client.fetch_status(&credential).await.unwrap();
        let points = client.fetch_points(&credential).await.unwrap();
        assert_eq!(status.as_deref(), Some("https://glados.example/api/user/status"));
        assert_eq!(points.as_deref(), Some("https://glados.example/api/user/points"));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_not_an_error() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_execute()
            .returning(|_| Err(anyhow::anyhow!("dns error")));

        let credential = Credential::new("koa:sess=abc").unwrap();
        let body = client(transport).check_in(&credential).await.unwrap();
        assert!(body.is_none());
    }
}
