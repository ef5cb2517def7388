use std::sync::{Arc, Mutex, PoisonError};

use log::warn;

use super::time_value::TimeValue;

/// Source of "now" for frame staleness decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> TimeValue;
}

/// Wall clock since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeValue {
        match TimeValue::try_now() {
            Ok(now) => now,
            Err(error) => {
                warn!("{}, using zero time", error);
                TimeValue::ZERO
            }
        }
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    time: Arc<Mutex<TimeValue>>,
}

impl ManualClock {
    pub fn new(start: TimeValue) -> Self {
        Self {
            time: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, time: TimeValue) {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }

    pub fn advance_millis(&self, millis: i64) {
        let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
        *time = time.add_millis(millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> TimeValue {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
