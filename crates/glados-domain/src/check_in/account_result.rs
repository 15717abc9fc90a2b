use crate::exchange::{ExchangeAnalyzer, ExchangeSummary};

use super::value_objects::{CheckInOutcome, CheckInStatus, PointsReply, StatusReply};

pub const UNKNOWN_EMAIL: &str = "Unknown";

/// Processing stage of one account within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProcessingStage {
    Pending,
    CheckedIn,
    StatusFetched,
    PointsFetched,
    Finalized,
}

/// Final, immutable record of one account's check-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountResult {
    pub index: usize,
    pub email: String,
    pub status: CheckInStatus,
    pub message: String,
    pub points_delta: i64,
    pub points_total: i64,
    pub days_remaining: i64,
    pub exchange_summary: String,
}

/// Accumulates the three best-effort steps for one account.
///
/// Every step is optional: a missing step leaves the defaults in place
/// (email `Unknown`, zero days, zero points).
#[derive(Debug)]
pub struct AccountResultBuilder {
    index: usize,
    stage: ProcessingStage,
    outcome: Option<CheckInOutcome>,
    email: Option<String>,
    days_remaining: Option<i64>,
    points_total: Option<i64>,
    exchange: Option<ExchangeSummary>,
    error: Option<String>,
}

impl AccountResultBuilder {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            stage: ProcessingStage::Pending,
            outcome: None,
            email: None,
            days_remaining: None,
            points_total: None,
            exchange: None,
            error: None,
        }
    }

    pub fn stage(&self) -> ProcessingStage {
        self.stage
    }

    pub fn status(&self) -> CheckInStatus {
        if self.error.is_some() {
            return CheckInStatus::Error;
        }
        self.outcome
            .as_ref()
            .map(|o| o.status)
            .unwrap_or(CheckInStatus::Failed)
    }

    pub fn record_check_in(&mut self, outcome: CheckInOutcome) {
        self.outcome = Some(outcome);
        self.advance(ProcessingStage::CheckedIn);
    }

    pub fn record_status(&mut self, reply: Option<StatusReply>) {
        if let Some(reply) = reply {
            self.email = reply.email;
            self.days_remaining = reply.left_days;
        }
        self.advance(ProcessingStage::StatusFetched);
    }

    pub fn record_points(&mut self, reply: Option<PointsReply>) {
        if let Some(reply) = reply {
            self.points_total = reply.total;
            let balance = self.resolved_total();
            self.exchange = Some(ExchangeAnalyzer::summarize(balance, &reply.plans));
        }
        self.advance(ProcessingStage::PointsFetched);
    }

    /// Mark the account as aborted by an unexpected fault. Whatever was
    /// already recorded is kept.
    pub fn record_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn finalize(mut self) -> AccountResult {
        self.advance(ProcessingStage::Finalized);
        let status = self.status();
        let points_total = self.resolved_total();

        let (message, points_delta) = match (&self.error, self.outcome) {
            (Some(error), outcome) => (
                format!("Script exception: {}", error),
                outcome.map(|o| o.points_delta).unwrap_or(0),
            ),
            (None, Some(outcome)) => (outcome.message, outcome.points_delta),
            (None, None) => ("Check-in not attempted".to_string(), 0),
        };

        AccountResult {
            index: self.index,
            email: self.email.unwrap_or_else(|| UNKNOWN_EMAIL.to_string()),
            status,
            message,
            points_delta,
            points_total,
            days_remaining: self.days_remaining.unwrap_or(0),
            exchange_summary: self
                .exchange
                .unwrap_or(ExchangeSummary::CannotAnalyze)
                .to_string(),
        }
    }

    // Points endpoint first, then the balance echoed by the check-in reply
    fn resolved_total(&self) -> i64 {
        self.points_total
            .or_else(|| self.outcome.as_ref().and_then(|o| o.balance_hint))
            .unwrap_or(0)
    }

    fn advance(&mut self, stage: ProcessingStage) {
        if stage > self.stage {
            self.stage = stage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check_in::CheckInReply;
    use crate::exchange::CANNOT_ANALYZE;

    #[test]
    fn test_defaults_when_every_step_is_missing() {
        let mut builder = AccountResultBuilder::new(3);
        builder.record_check_in(CheckInOutcome::no_response());
        builder.record_status(None);
        builder.record_points(None);
        let result = builder.finalize();

        assert_eq!(result.index, 3);
        assert_eq!(result.email, UNKNOWN_EMAIL);
        assert_eq!(result.status, CheckInStatus::Failed);
        assert_eq!(result.points_delta, 0);
        assert_eq!(result.points_total, 0);
        assert_eq!(result.days_remaining, 0);
        assert_eq!(result.exchange_summary, CANNOT_ANALYZE);
    }

    #[test]
    fn test_stages_advance_in_order() {
        let mut builder = AccountResultBuilder::new(1);
        assert_eq!(builder.stage(), ProcessingStage::Pending);
        builder.record_check_in(CheckInOutcome::no_response());
        assert_eq!(builder.stage(), ProcessingStage::CheckedIn);
        builder.record_status(None);
        assert_eq!(builder.stage(), ProcessingStage::StatusFetched);
        builder.record_points(None);
        assert_eq!(builder.stage(), ProcessingStage::PointsFetched);
    }

    #[test]
    fn test_full_success_result() {
        let reply = CheckInReply::parse(r#"{"code":0,"message":"Checkin! Got 5 points","points":"5"}"#)
            .unwrap();

        let mut builder = AccountResultBuilder::new(1);
        builder.record_check_in(reply.into_outcome());
        builder.record_status(Some(StatusReply {
            email: Some("a@example.com".to_string()),
            left_days: Some(42),
        }));
        builder.record_points(Some(PointsReply {
            total: Some(100),
            plans: serde_json::json!([{"points": 50, "days": 7}, {"points": 200, "days": 30}]),
        }));
        let result = builder.finalize();

        assert_eq!(result.status, CheckInStatus::Success);
        assert_eq!(result.email, "a@example.com");
        assert_eq!(result.points_delta, 5);
        assert_eq!(result.points_total, 100);
        assert_eq!(result.days_remaining, 42);
        assert_eq!(
            result.exchange_summary,
            "50pts/7d: can redeem now; 200pts/30d: short 100"
        );
    }

    #[test]
    fn test_out_of_range_balance_cannot_be_analyzed() {
        let reply =
            PointsReply::parse(r#"{"points":"-1e19","plans":[{"points":50,"days":7}]}"#).unwrap();

        let mut builder = AccountResultBuilder::new(1);
        builder.record_check_in(CheckInOutcome::no_response());
        builder.record_status(None);
        builder.record_points(Some(reply));
        let result = builder.finalize();

        assert_eq!(result.points_total, i64::MIN);
        assert_eq!(result.exchange_summary, CANNOT_ANALYZE);
    }

    #[test]
    fn test_total_falls_back_to_check_in_balance() {
        let reply =
            CheckInReply::parse(r#"{"code":1,"message":"repeat","list":[{"balance":"88.0000"}]}"#)
                .unwrap();

        let mut builder = AccountResultBuilder::new(1);
        builder.record_check_in(reply.into_outcome());
        builder.record_points(None);
        let result = builder.finalize();

        assert_eq!(result.status, CheckInStatus::AlreadyChecked);
        assert_eq!(result.points_total, 88);
    }

    #[test]
    fn test_error_overrides_recorded_status() {
        let reply = CheckInReply::parse(r#"{"code":0,"points":3}"#).unwrap();

        let mut builder = AccountResultBuilder::new(2);
        builder.record_check_in(reply.into_outcome());
        builder.record_error("invalid header value");
        let result = builder.finalize();

        assert_eq!(result.status, CheckInStatus::Error);
        assert!(result.message.contains("invalid header value"));
        assert_eq!(result.points_delta, 3);
    }
}
