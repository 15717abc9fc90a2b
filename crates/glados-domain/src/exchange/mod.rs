use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::shared::{coerce_int, coerce_int_or, DomainError};

pub const CANNOT_ANALYZE: &str = "cannot analyze";
pub const NO_PLANS: &str = "no plans";

/// A redemption tier: spend `cost` points to gain `days` of service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangePlan {
    pub cost: i64,
    pub days: i64,
}

impl ExchangePlan {
    pub fn new(cost: i64, days: i64) -> Self {
        Self { cost, days }
    }

    /// Parse the `plans` field of the points endpoint.
    ///
    /// Accepts either an array of `{points, days}` entries or an object whose
    /// values are such entries (taken in document order). `points` is
    /// required on every entry; a missing `days` reads as 0.
    pub fn parse_list(plans: &Value) -> Result<Vec<ExchangePlan>, DomainError> {
        let entries: Vec<&Value> = match plans {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            Value::Null => Vec::new(),
            other => {
                return Err(DomainError::Deserialization(format!(
                    "plans must be an array or object, got {}",
                    other
                )))
            }
        };

        entries.into_iter().map(Self::parse_entry).collect()
    }

    fn parse_entry(entry: &Value) -> Result<ExchangePlan, DomainError> {
        let cost = coerce_int(&entry["points"]).ok_or_else(|| {
            DomainError::Deserialization(format!("plan without numeric points: {}", entry))
        })?;
        Ok(Self {
            cost,
            days: coerce_int_or(&entry["days"], 0),
        })
    }
}

/// Affordability of one tier against the current balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierVerdict {
    Affordable { cost: i64, days: i64 },
    Short { cost: i64, days: i64, shortfall: i64 },
}

impl fmt::Display for TierVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierVerdict::Affordable { cost, days } => {
                write!(f, "{}pts/{}d: can redeem now", cost, days)
            }
            TierVerdict::Short {
                cost,
                days,
                shortfall,
            } => write!(f, "{}pts/{}d: short {}", cost, days, shortfall),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeSummary {
    Verdicts(Vec<TierVerdict>),
    CannotAnalyze,
}

impl fmt::Display for ExchangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeSummary::CannotAnalyze => f.write_str(CANNOT_ANALYZE),
            ExchangeSummary::Verdicts(verdicts) if verdicts.is_empty() => f.write_str(NO_PLANS),
            ExchangeSummary::Verdicts(verdicts) => {
                let parts: Vec<String> = verdicts.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join("; "))
            }
        }
    }
}

/// Computes which redemption tiers the current balance can pay for
pub struct ExchangeAnalyzer;

impl ExchangeAnalyzer {
    /// Zero-cost (or negative) tiers are placeholders and are skipped.
    /// `None` when a shortfall does not fit in an `i64`.
    pub fn analyze(balance: i64, plans: &[ExchangePlan]) -> Option<Vec<TierVerdict>> {
        plans
            .iter()
            .filter(|plan| plan.cost > 0)
            .map(|plan| {
                if balance >= plan.cost {
                    return Some(TierVerdict::Affordable {
                        cost: plan.cost,
                        days: plan.days,
                    });
                }
                Some(TierVerdict::Short {
                    cost: plan.cost,
                    days: plan.days,
                    shortfall: plan.cost.checked_sub(balance)?,
                })
            })
            .collect()
    }

    /// Analyze the raw `plans` JSON; malformed input or out-of-range numbers
    /// collapse to [`ExchangeSummary::CannotAnalyze`].
    pub fn summarize(balance: i64, plans: &Value) -> ExchangeSummary {
        ExchangePlan::parse_list(plans)
            .ok()
            .and_then(|plans| Self::analyze(balance, &plans))
            .map_or(ExchangeSummary::CannotAnalyze, ExchangeSummary::Verdicts)
    }
}
