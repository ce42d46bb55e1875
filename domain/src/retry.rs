use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 4;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(10);

/// Fixed-count, fixed-delay retry bound for the generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }

    /// Total attempts. A zero bound still makes one call.
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }

    /// Whether another attempt follows the 1-based `attempt`.
    pub fn should_retry_after(&self, attempt: u32) -> bool {
        attempt < self.attempts()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }
}
