use log::debug;
use reqwest::Method;

use glados_domain::credential::Credential;
use glados_domain::shared::DomainError;

use crate::http::endpoints::{POINTS_PATH, STATUS_PATH};

impl super::GladosClient {
    /// Account status (email, remaining days)
    pub(super) async fn get_status(
        &self,
        credential: &Credential,
    ) -> Result<Option<String>, DomainError> {
        let response = self
            .requester
            .request(Method::GET, STATUS_PATH, credential.as_str(), None)
            .await?;

        Ok(response.map(|r| {
            debug!("Status response body: {}", r.body);
            r.body
        }))
    }

    /// Point balance and redemption plans
    pub(super) async fn get_points(
        &self,
        credential: &Credential,
    ) -> Result<Option<String>, DomainError> {
        let response = self
            .requester
            .request(Method::GET, POINTS_PATH, credential.as_str(), None)
            .await?;

        Ok(response.map(|r| {
            debug!("Points response body: {}", r.body);
            r.body
        }))
    }
}
