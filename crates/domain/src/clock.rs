//! Ticking projection of the device clock between state reads.

use std::time::{Duration, Instant};

use chrono::{NaiveDateTime, TimeDelta};

/// A device wall-clock reading anchored to the local monotonic clock.
///
/// The hub fetches the device time once and afterwards derives "device now"
/// locally: the fetched value is paired with a monotonic observation point
/// and projected forward by whole elapsed seconds, matching the second
/// precision of the wire token. The anchor is an explicit value owned by
/// whoever needs the projection; there is no process-wide clock state.
#[derive(Debug, Clone, Copy)]
pub struct DeviceClock {
    origin: NaiveDateTime,
    observed_at: Instant,
}

impl DeviceClock {
    /// Anchor a freshly observed device time to the current monotonic clock.
    #[must_use]
    pub fn anchor(origin: NaiveDateTime) -> Self {
        Self {
            origin,
            observed_at: Instant::now(),
        }
    }

    /// The device time as observed, before any projection.
    #[must_use]
    pub fn origin(&self) -> NaiveDateTime {
        self.origin
    }

    /// Project the device clock to the present.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.project(self.observed_at.elapsed())
    }

    /// Project the device clock `elapsed` time past the anchor point.
    ///
    /// Sub-second elapsed time is discarded. Saturates at the anchor when the
    /// shifted value would leave the representable range.
    #[must_use]
    pub fn project(&self, elapsed: Duration) -> NaiveDateTime {
        i64::try_from(elapsed.as_secs())
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|delta| self.origin.checked_add_signed(delta))
            .unwrap_or(self.origin)
    }
}
