use log::{error, info};
use tracing::instrument;

use glados_domain::check_in::AccountResultBuilder;
use glados_domain::report::{ReportAggregator, RunSummary};
use glados_domain::Credential;

use super::CheckInExecutor;
use crate::application::services::pacing::PauseRange;

impl CheckInExecutor {
    /// Process every credential in order, one at a time, with a randomized
    /// pause after each account.
    ///
    /// Each account runs in its own task so that a panic is contained and
    /// recorded as an `Error` result; the remaining accounts still run.
    #[instrument(skip(self, credentials, pause), fields(batch_size = credentials.len()))]
    pub async fn execute_batch(
        &self,
        credentials: Vec<Credential>,
        pause: &PauseRange,
    ) -> RunSummary {
        let total = credentials.len();
        let mut aggregator = ReportAggregator::new();

        for (offset, credential) in credentials.into_iter().enumerate() {
            let index = offset + 1;
            info!("Processing account {}/{}", index, total);

            let executor = self.clone();
            let handle =
                tokio::spawn(async move { executor.process_account(index, &credential).await });

            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!("[account {}] Task failed: {}", index, e);
                    let mut builder = AccountResultBuilder::new(index);
                    builder.record_error(format!("task failed: {}", e));
                    builder.finalize()
                }
            };
            aggregator.record(result);

            pause.wait().await;
        }

        let summary = aggregator.finish();
        info!(
            "Batch finished: ok {}, repeat {}, fail {}, cookie invalid {}",
            summary.ok, summary.repeat, summary.fail, summary.credential_invalid
        );
        summary
    }
}
