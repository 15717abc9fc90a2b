use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::shared::{coerce_int, DomainError};

/// Check-in reply codes returned by the service
pub const CODE_SUCCESS: i64 = 0;
pub const CODE_ALREADY_CHECKED: i64 = 1;
pub const CODE_CREDENTIAL_INVALID: i64 = -2;

/// Classification of one account's check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckInStatus {
    Success,
    AlreadyChecked,
    CredentialInvalid,
    Failed,
    /// Unexpected fault while processing the account
    Error,
}

impl CheckInStatus {
    pub fn from_code(code: Option<i64>) -> Self {
        match code {
            Some(CODE_SUCCESS) => CheckInStatus::Success,
            Some(CODE_ALREADY_CHECKED) => CheckInStatus::AlreadyChecked,
            Some(CODE_CREDENTIAL_INVALID) => CheckInStatus::CredentialInvalid,
            _ => CheckInStatus::Failed,
        }
    }

    /// `Failed` and `Error` both count toward the failure counter
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckInStatus::Failed | CheckInStatus::Error)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckInStatus::Success => "✅ Success",
            CheckInStatus::AlreadyChecked => "🔁 Already checked in",
            CheckInStatus::CredentialInvalid => "⛔ Cookie invalid",
            CheckInStatus::Failed => "❌ Failed",
            CheckInStatus::Error => "❌ Script exception",
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the check-in step contributes to an account result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInOutcome {
    pub status: CheckInStatus,
    pub message: String,
    pub points_delta: i64,
    /// Balance reported inside the check-in reply (`list[0].balance`)
    pub balance_hint: Option<i64>,
}

impl CheckInOutcome {
    pub fn no_response() -> Self {
        Self {
            status: CheckInStatus::Failed,
            message: "No mirror answered the check-in request".to_string(),
            points_delta: 0,
            balance_hint: None,
        }
    }

    pub fn malformed(reason: &str) -> Self {
        Self {
            status: CheckInStatus::Failed,
            message: format!("Unreadable check-in reply: {}", reason),
            points_delta: 0,
            balance_hint: None,
        }
    }
}

fn parse_object(body: &str, what: &str) -> Result<Value, DomainError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        DomainError::Deserialization(format!("{} reply is not JSON: {}", what, e))
    })?;
    if !value.is_object() {
        return Err(DomainError::Deserialization(format!(
            "{} reply is not a JSON object",
            what
        )));
    }
    Ok(value)
}

/// Parsed body of `POST /api/user/checkin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInReply {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub points: Option<i64>,
    pub balance: Option<i64>,
}

impl CheckInReply {
    pub fn parse(body: &str) -> Result<Self, DomainError> {
        let data = parse_object(body, "check-in")?;

        Ok(Self {
            code: coerce_int(&data["code"]),
            message: data["message"].as_str().map(str::to_string),
            points: coerce_int(&data["points"]),
            balance: coerce_int(&data["list"][0]["balance"]),
        })
    }

    pub fn status(&self) -> CheckInStatus {
        CheckInStatus::from_code(self.code)
    }

    pub fn into_outcome(self) -> CheckInOutcome {
        let status = self.status();
        let points_delta = match status {
            CheckInStatus::Success => self.points.unwrap_or(0),
            _ => 0,
        };
        let message = self
            .message
            .unwrap_or_else(|| match self.code {
                Some(code) => format!("code {}", code),
                None => "reply without code".to_string(),
            });

        CheckInOutcome {
            status,
            message,
            points_delta,
            balance_hint: self.balance,
        }
    }
}

/// Parsed body of `GET /api/user/status`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReply {
    pub email: Option<String>,
    pub left_days: Option<i64>,
}

impl StatusReply {
    pub fn parse(body: &str) -> Result<Self, DomainError> {
        let data = parse_object(body, "status")?;
        let inner = &data["data"];

        Ok(Self {
            email: inner["email"]
                .as_str()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            left_days: coerce_int(&inner["leftDays"]),
        })
    }
}

/// Parsed body of `GET /api/user/points`
#[derive(Debug, Clone, PartialEq)]
pub struct PointsReply {
    pub total: Option<i64>,
    pub plans: Value,
}

impl PointsReply {
    pub fn parse(body: &str) -> Result<Self, DomainError> {
        let mut data = parse_object(body, "points")?;

        Ok(Self {
            total: coerce_int(&data["points"]),
            plans: data
                .get_mut("plans")
                .map(Value::take)
                .unwrap_or(Value::Null),
        })
    }
}
