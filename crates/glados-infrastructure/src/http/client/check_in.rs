use log::{debug, info};
use reqwest::Method;
use serde_json::json;

use glados_domain::credential::Credential;
use glados_domain::shared::DomainError;

use crate::http::endpoints::CHECK_IN_PATH;

impl super::GladosClient {
    /// POST the daily check-in and hand back the raw reply body
    pub(super) async fn post_check_in(
        &self,
        credential: &Credential,
    ) -> Result<Option<String>, DomainError> {
        let payload = json!({ "token": self.requester.config().check_in_token() });

        let response = self
            .requester
            .request(Method::POST, CHECK_IN_PATH, credential.as_str(), Some(&payload))
            .await?;

        Ok(response.map(|r| {
            info!("Check-in response status: {}", r.status);
            debug!("Check-in response body: {}", r.body);
            r.body
        }))
    }
}
