use rand::Rng;
use std::time::Duration;

use glados_infrastructure::config::TimeoutConfig;

/// Bounds of the randomized pause between two accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRange {
    min: Duration,
    max: Duration,
}

impl PauseRange {
    /// Bounds are swapped when given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Uniform pick in `[min, max]`, millisecond granularity
    pub fn sample(&self) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        if min_ms >= max_ms {
            return self.min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }

    pub async fn wait(&self) {
        // Sample before awaiting: ThreadRng is not Send
        let delay = self.sample();
        if delay.is_zero() {
            return;
        }
        log::debug!("Pausing {}ms before next account", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}

impl From<&TimeoutConfig> for PauseRange {
    fn from(config: &TimeoutConfig) -> Self {
        Self::new(config.pause_min, config.pause_max)
    }
}
