use std::time::Duration;

/// Tunables for the queue consumer.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Delay between consecutive tasks (milliseconds).
    ///
    /// Skipped on the first iteration and right after a discarded entry, so bad input
    /// drains quickly while real work stays paced against Discord's rate limits.
    pub pacing_ms: u64,

    /// Queue depth at which the consumer notifies the owner and shuts the bot down.
    pub high_water_mark: usize,

    /// A task that has already failed more than this many times is dropped.
    pub max_retries: u32,

    /// Trailing window for per-subject rate limiting (seconds).
    pub rate_limit_window_seconds: u64,

    /// Occurrences of one subject inside the window at which tasks are discarded.
    pub rate_limit_threshold: usize,

    /// Lock-wait timeout applied before each handler body (seconds).
    pub lock_timeout_seconds: u64,
}

impl ConsumerConfig {
    /// Get pacing delay as Duration
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Get rate limit window as Duration
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_seconds)
    }
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            pacing_ms: 5000,                // 5 seconds between tasks
            high_water_mark: 400,
            max_retries: 5,
            rate_limit_window_seconds: 30,
            rate_limit_threshold: 5,
            lock_timeout_seconds: 10,
        }
    }
}
