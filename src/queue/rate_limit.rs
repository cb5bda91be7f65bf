//! Rolling per-key occurrence counter.
//!
//! Each key keeps the instants at which it was recorded. Entries expire individually
//! once they fall outside the trailing window. Counting a key evicts its own expired
//! entries; recording sweeps every key and drops the ones left empty.

use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

#[derive(Debug)]
pub struct RollingCounter {
    window: Duration,
    entries: HashMap<String, VecDeque<Instant>>,
}

impl RollingCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: HashMap::new(),
        }
    }

    /// Records one occurrence of `key` now.
    pub fn record(&mut self, key: &str) {
        self.record_at(key, Instant::now());
    }

    /// Number of occurrences of `key` inside the trailing window.
    pub fn count(&mut self, key: &str) -> usize {
        self.count_at(key, Instant::now())
    }

    pub fn record_at(&mut self, key: &str, now: Instant) {
        let window = self.window;
        self.entries.retain(|_, occurrences| {
            Self::evict(occurrences, window, now);
            !occurrences.is_empty()
        });

        self.entries
            .entry(key.to_string())
            .or_default()
            .push_back(now);
    }

    pub fn count_at(&mut self, key: &str, now: Instant) -> usize {
        let window = self.window;
        let Some(occurrences) = self.entries.get_mut(key) else {
            return 0;
        };

        Self::evict(occurrences, window, now);
        let count = occurrences.len();
        if count == 0 {
            self.entries.remove(key);
        }

        count
    }

    /// Number of keys with at least one occurrence not yet swept.
    pub fn tracked_keys(&self) -> usize {
        self.entries.len()
    }

    fn evict(occurrences: &mut VecDeque<Instant>, window: Duration, now: Instant) {
        while let Some(oldest) = occurrences.front() {
            if now.saturating_duration_since(*oldest) >= window {
                occurrences.pop_front();
            } else {
                break;
            }
        }
    }
}
