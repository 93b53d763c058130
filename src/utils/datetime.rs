//! Timestamp utility functions
//!
//! Rows carry millisecond Unix timestamps. This module produces them, turns
//! them back into `chrono` values, and provides the clock the store stamps
//! writes with.

use chrono::{DateTime, Local, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::todo::Millis;

/// Standard format used when rendering a stored timestamp for humans
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> Millis {
    Utc::now().timestamp_millis()
}

/// Convert a stored timestamp to a UTC datetime
///
/// # Returns
/// * `None` if the value is outside the range chrono can represent
pub fn from_millis(millis: Millis) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Format a stored timestamp in local time, falling back to the raw number
pub fn format_millis(millis: Millis) -> String {
    match from_millis(millis) {
        Some(dt) => dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}

/// Millisecond clock whose readings never repeat or go backwards.
///
/// Each reading is `max(wall clock, previous reading + 1)`, so two writes
/// issued through the same clock always get distinct, increasing stamps even
/// inside one wall-clock millisecond or across a backwards clock adjustment.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later reading strictly greater than `millis`
    pub fn observe(&self, millis: Millis) {
        self.last.fetch_max(millis, Ordering::AcqRel);
    }

    /// Take the next timestamp
    pub fn now(&self) -> Millis {
        self.advance(now_millis())
    }

    fn advance(&self, wall: Millis) -> Millis {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = wall.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}
