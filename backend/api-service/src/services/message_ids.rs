use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out time-derived message ids that are strictly increasing within the
/// process: each id is the current Unix time in milliseconds, bumped past the
/// previous id when two requests land in the same millisecond.
#[derive(Debug, Default)]
pub struct MessageIdGenerator {
    last: AtomicU64,
}

impl MessageIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_after(now)
    }

    fn next_after(&self, now: u64) -> u64 {
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}
