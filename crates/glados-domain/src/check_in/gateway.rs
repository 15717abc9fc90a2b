use async_trait::async_trait;

use crate::credential::Credential;
use crate::shared::DomainError;

/// Access to the three account endpoints of the service.
///
/// Each call returns the body of the first successful (HTTP 200) reply, or
/// `Ok(None)` when no mirror answered. `Err` is reserved for unexpected
/// faults that should abort the account, not for transport failures.
#[async_trait]
pub trait CheckInGateway: Send + Sync {
    async fn check_in(&self, credential: &Credential) -> Result<Option<String>, DomainError>;

    async fn fetch_status(&self, credential: &Credential) -> Result<Option<String>, DomainError>;

    async fn fetch_points(&self, credential: &Credential) -> Result<Option<String>, DomainError>;
}
