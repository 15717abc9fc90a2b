use crate::check_in::{AccountResult, CheckInStatus};
use crate::notification::{NotificationMessage, PushTemplate};

use super::render::render_body;

const TITLE_PREFIX: &str = "GLaDOS";

/// Notification sent instead of a report when no credential is configured
pub fn missing_credentials_message() -> NotificationMessage {
    NotificationMessage::new(
        format!("{} check-in", TITLE_PREFIX),
        "❌ No COOKIES detected, nothing was checked in",
    )
}

/// Folds account results into run-level counters
#[derive(Debug, Default)]
pub struct ReportAggregator {
    ok: usize,
    fail: usize,
    repeat: usize,
    credential_invalid: usize,
    results: Vec<AccountResult>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: AccountResult) {
        match result.status {
            CheckInStatus::Success => self.ok += 1,
            CheckInStatus::AlreadyChecked => self.repeat += 1,
            CheckInStatus::CredentialInvalid => self.credential_invalid += 1,
            CheckInStatus::Failed | CheckInStatus::Error => self.fail += 1,
        }
        self.results.push(result);
    }

    pub fn finish(self) -> RunSummary {
        RunSummary {
            ok: self.ok,
            fail: self.fail,
            repeat: self.repeat,
            credential_invalid: self.credential_invalid,
            results: self.results,
        }
    }
}

/// Outcome of a whole run, consumed once by the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub ok: usize,
    pub fail: usize,
    pub repeat: usize,
    pub credential_invalid: usize,
    pub results: Vec<AccountResult>,
}

impl RunSummary {
    /// First match wins: invalid cookie, then failures, then all good.
    pub fn title(&self) -> String {
        if self.credential_invalid > 0 {
            format!(
                "{} ⚠️ Cookie invalid ({} account(s))",
                TITLE_PREFIX, self.credential_invalid
            )
        } else if self.fail > 0 {
            format!(
                "{} ❌ Check-in completed with {} failure(s) (ok {}, fail {})",
                TITLE_PREFIX, self.fail, self.ok, self.fail
            )
        } else {
            format!(
                "{} ✅ All check-ins completed (ok {}, repeat {})",
                TITLE_PREFIX, self.ok, self.repeat
            )
        }
    }

    pub fn body(&self, template: PushTemplate) -> String {
        render_body(&self.results, template)
    }

    pub fn to_message(&self, template: PushTemplate) -> NotificationMessage {
        NotificationMessage::new(self.title(), self.body(template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, status: CheckInStatus) -> AccountResult {
        AccountResult {
            index,
            email: format!("user{}@example.com", index),
            status,
            message: String::new(),
            points_delta: 0,
            points_total: 0,
            days_remaining: 0,
            exchange_summary: String::new(),
        }
    }

    fn summarize(statuses: &[CheckInStatus]) -> RunSummary {
        let mut aggregator = ReportAggregator::new();
        for (i, status) in statuses.iter().enumerate() {
            aggregator.record(result(i + 1, *status));
        }
        aggregator.finish()
    }

    #[test]
    fn test_counters() {
        let summary = summarize(&[
            CheckInStatus::Success,
            CheckInStatus::AlreadyChecked,
            CheckInStatus::Failed,
            CheckInStatus::Error,
            CheckInStatus::CredentialInvalid,
            CheckInStatus::Success,
        ]);

        assert_eq!(summary.ok, 2);
        assert_eq!(summary.repeat, 1);
        assert_eq!(summary.fail, 2);
        assert_eq!(summary.credential_invalid, 1);
        assert_eq!(summary.results.len(), 6);
    }

    #[test]
    fn test_credential_invalid_title_wins() {
        let summary = summarize(&[
            CheckInStatus::Failed,
            CheckInStatus::CredentialInvalid,
            CheckInStatus::Success,
        ]);
        assert!(summary.title().contains("Cookie invalid"));
    }

    #[test]
    fn test_failure_title_includes_counts() {
        let summary = summarize(&[CheckInStatus::Success, CheckInStatus::Error]);
        assert_eq!(
            summary.title(),
            "GLaDOS ❌ Check-in completed with 1 failure(s) (ok 1, fail 1)"
        );
    }

    #[test]
    fn test_repeat_does_not_count_as_failure() {
        let summary = summarize(&[CheckInStatus::AlreadyChecked, CheckInStatus::Success]);
        assert_eq!(summary.fail, 0);
        assert_eq!(
            summary.title(),
            "GLaDOS ✅ All check-ins completed (ok 1, repeat 1)"
        );
    }

    #[test]
    fn test_message_keeps_processing_order() {
        let summary = summarize(&[CheckInStatus::Success, CheckInStatus::AlreadyChecked]);
        let message = summary.to_message(PushTemplate::Markdown);
        let first = message.content.find("user1@").unwrap();
        let second = message.content.find("user2@").unwrap();
        assert!(first < second);
    }
}
