use std::time::Duration;

use glados_domain::shared::DomainError;

/// Timing knobs of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Per-request HTTP timeout, applied to every mirror attempt
    pub http_request: Duration,

    /// Lower bound of the randomized pause between accounts
    pub pause_min: Duration,

    /// Upper bound of the randomized pause between accounts
    pub pause_max: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(10),
            pause_min: Duration::from_millis(1000),
            pause_max: Duration::from_millis(2000),
        }
    }
}

impl TimeoutConfig {
    pub fn new(
        http_request: Duration,
        pause_min: Duration,
        pause_max: Duration,
    ) -> Result<Self, DomainError> {
        if http_request.is_zero() {
            return Err(DomainError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }
        if pause_min > pause_max {
            return Err(DomainError::Configuration(format!(
                "Pause range is inverted: {}ms > {}ms",
                pause_min.as_millis(),
                pause_max.as_millis()
            )));
        }

        Ok(Self {
            http_request,
            pause_min,
            pause_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimeoutConfig::default();
        assert_eq!(config.http_request, Duration::from_secs(10));
        assert!(config.pause_min <= config.pause_max);
    }

    #[test]
    fn test_rejects_inverted_pause_and_zero_timeout() {
        assert!(TimeoutConfig::new(
            Duration::from_secs(10),
            Duration::from_secs(3),
            Duration::from_secs(1)
        )
        .is_err());
        assert!(TimeoutConfig::new(Duration::ZERO, Duration::ZERO, Duration::ZERO).is_err());
        assert!(TimeoutConfig::new(
            Duration::from_secs(5),
            Duration::from_secs(1),
            Duration::from_secs(3)
        )
        .is_ok());
    }
}
