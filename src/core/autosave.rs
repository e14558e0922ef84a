use crate::core::persistence::SectionSink;
use crate::core::store::IntervalLogStore;
use crate::errors::AppResult;
use crate::models::section_key::SectionKey;
use std::time::{Duration, Instant};

/// Periodic auto-save, driven by the caller's clock.
///
/// Nothing is spawned: the owner calls `tick` from its own loop and the store's
/// autosave callback runs whenever a full interval has elapsed.
#[derive(Debug, Clone)]
pub struct AutoSave {
    interval: Duration,
    last: Instant,
}

impl AutoSave {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    /// Run the autosave callback if due. Returns whether it ran.
    pub fn tick<S: SectionSink>(
        &mut self,
        now: Instant,
        store: &mut IntervalLogStore<S>,
        key: &SectionKey,
    ) -> AppResult<bool> {
        if !self.is_due(now) {
            return Ok(false);
        }

        store.autosave(key)?;
        self.last = now;
        Ok(true)
    }
}
