use log::{info, warn};

use glados_domain::notification::PushTemplate;
use glados_domain::report::{missing_credentials_message, RunSummary};
use glados_domain::Credential;

use super::check_in_executor::CheckInExecutor;
use super::notification_service::NotificationService;
use super::pacing::PauseRange;

/// One complete run: check in every account, then push a single report
pub struct CheckInRunner {
    executor: CheckInExecutor,
    notifications: NotificationService,
    pause: PauseRange,
    template: PushTemplate,
}

impl CheckInRunner {
    pub fn new(
        executor: CheckInExecutor,
        notifications: NotificationService,
        pause: PauseRange,
        template: PushTemplate,
    ) -> Self {
        Self {
            executor,
            notifications,
            pause,
            template,
        }
    }

    /// Returns `None` when there was nothing to check in. The "no cookies"
    /// notice is pushed in that case and no account endpoint is contacted.
    pub async fn run(&self, credentials: Vec<Credential>) -> Option<RunSummary> {
        if credentials.is_empty() {
            warn!("No COOKIES configured, nothing to check in");
            self.notifications
                .notify(&missing_credentials_message())
                .await;
            return None;
        }

        info!("Starting check-in for {} account(s)", credentials.len());
        let summary = self.executor.execute_batch(credentials, &self.pause).await;

        let message = summary.to_message(self.template);
        info!("{}", message.title);
        info!("\n{}", summary.body(PushTemplate::Markdown));

        self.notifications.notify(&message).await;
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        credentials, Call, FakeGateway, RecordingSender, Reply,
    };
    use glados_domain::notification::NotificationSender;
    use std::sync::Arc;

    fn runner(gateway: Arc<FakeGateway>, sender: Arc<RecordingSender>) -> CheckInRunner {
        CheckInRunner::new(
            CheckInExecutor::new(gateway),
            NotificationService::new(Some(sender as Arc<dyn NotificationSender>)),
            PauseRange::none(),
            PushTemplate::Markdown,
        )
    }

    #[tokio::test]
    async fn test_empty_credentials_push_once_without_check_in() {
        let gateway = FakeGateway::new();
        let sender = RecordingSender::new();

        let summary = runner(gateway.clone(), sender.clone()).run(Vec::new()).await;

        assert!(summary.is_none());
        assert_eq!(gateway.count(Call::CheckIn), 0);
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].content.contains("No COOKIES"));
    }

    #[tokio::test]
    async fn test_invalid_cookie_title_wins_over_failures() {
        let gateway = FakeGateway::new();
        gateway.push(Call::CheckIn, Reply::body(r#"{"code":0,"points":1}"#));
        gateway.push(Call::CheckIn, Reply::body(r#"{"code":-2,"message":"login"}"#));
        gateway.push(Call::CheckIn, Reply::NoResponse);
        let sender = RecordingSender::new();

        let summary = runner(gateway.clone(), sender.clone())
            .run(credentials(&["a", "b", "c"]))
            .await
            .unwrap();

        assert_eq!(summary.ok, 1);
        assert_eq!(summary.credential_invalid, 1);
        assert_eq!(summary.fail, 1);
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].title.contains("Cookie invalid"));
    }

    #[tokio::test]
    async fn test_repeat_check_in_is_not_a_failure() {
        let gateway = FakeGateway::new();
        gateway.push(Call::CheckIn, Reply::body(r#"{"code":1,"message":"repeat"}"#));
        let sender = RecordingSender::new();

        let summary = runner(gateway, sender.clone())
            .run(credentials(&["a"]))
            .await
            .unwrap();

        assert_eq!(summary.fail, 0);
        assert_eq!(summary.repeat, 1);
        assert_eq!(
            sender.sent()[0].title,
            "GLaDOS ✅ All check-ins completed (ok 0, repeat 1)"
        );
    }

    #[tokio::test]
    async fn test_all_mirrors_down_reports_failure() {
        let gateway = FakeGateway::new();
        let sender = RecordingSender::new();

        let summary = runner(gateway, sender.clone())
            .run(credentials(&["a"]))
            .await
            .unwrap();

        assert_eq!(summary.fail, 1);
        let sent = sender.sent();
        assert_eq!(
            sent[0].title,
            "GLaDOS ❌ Check-in completed with 1 failure(s) (ok 0, fail 1)"
        );
        assert!(sent[0].content.contains("Unknown"));
    }

    #[tokio::test]
    async fn test_push_failure_does_not_fail_the_run() {
        let gateway = FakeGateway::new();
        gateway.push(Call::CheckIn, Reply::body(r#"{"code":0,"points":"5"}"#));
        let sender = RecordingSender::failing();

        let summary = runner(gateway, sender.clone())
            .run(credentials(&["a"]))
            .await
            .unwrap();

        assert_eq!(summary.ok, 1);
        assert_eq!(summary.results[0].points_delta, 5);
        assert_eq!(sender.sent().len(), 1);
    }
}
