use log::{error, info, warn};
use std::sync::Arc;
use tracing::instrument;

use glados_domain::check_in::{AccountResult, AccountResultBuilder, CheckInGateway, CheckInStatus};
use glados_domain::{Credential, DomainError};

mod batch;
mod execution;

/// Runs the check-in sequence for one credential at a time
#[derive(Clone)]
pub struct CheckInExecutor {
    gateway: Arc<dyn CheckInGateway>,
}

impl CheckInExecutor {
    pub fn new(gateway: Arc<dyn CheckInGateway>) -> Self {
        Self { gateway }
    }

    /// Check in, then look up status and points. Never fails: every step
    /// degrades to defaults, and a gateway fault turns the account into an
    /// `Error` result.
    #[instrument(skip(self, credential))]
    pub async fn process_account(&self, index: usize, credential: &Credential) -> AccountResult {
        let mut builder = AccountResultBuilder::new(index);

        if let Err(e) = self.run_steps(index, credential, &mut builder).await {
            error!(
                "[account {}] Aborted at stage {:?}: {}",
                index,
                builder.stage(),
                e.format_with_code()
            );
            builder.record_error(e.message());
        }

        let result = builder.finalize();
        info!(
            "[account {}] {} | {} | points {} ({:+}) | days {}",
            index,
            result.email,
            result.status,
            result.points_total,
            result.points_delta,
            result.days_remaining
        );
        result
    }

    async fn run_steps(
        &self,
        index: usize,
        credential: &Credential,
        builder: &mut AccountResultBuilder,
    ) -> Result<(), DomainError> {
        // 1. Check in
        let body = self.gateway.check_in(credential).await?;
        builder.record_check_in(execution::interpret_check_in(index, body));

        if builder.status() == CheckInStatus::CredentialInvalid {
            warn!("[account {}] Cookie rejected, skipping lookups", index);
            return Ok(());
        }

        // 2. Status: email and days left
        let body = self.gateway.fetch_status(credential).await?;
        builder.record_status(execution::interpret_status(index, body));

        // 3. Points and exchange plans
        let body = self.gateway.fetch_points(credential).await?;
        builder.record_points(execution::interpret_points(index, body));

        Ok(())
    }
}
