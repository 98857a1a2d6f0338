//! Clock service — use-cases around the device clock.

use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use clockhub_domain::clock::DeviceClock;
use clockhub_domain::error::ClockHubError;
use clockhub_domain::state::DeviceState;

use crate::ports::DeviceLink;

/// Application service for reading and steering the device clock.
///
/// Keeps the last fetched device time anchored to the local monotonic clock
/// so a ticking "device now" can be derived without re-polling the device.
pub struct ClockService<L> {
    link: Arc<L>,
    anchor: Mutex<Option<DeviceClock>>,
}

impl<L: DeviceLink> ClockService<L> {
    /// Create a new service talking through the given device link.
    pub fn new(link: Arc<L>) -> Self {
        Self {
            link,
            anchor: Mutex::new(None),
        }
    }

    /// Fetch the device state and re-anchor the local clock projection.
    ///
    /// # Errors
    ///
    /// Returns [`ClockHubError::Device`] when the device cannot be reached or
    /// returns an unreadable state document.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<DeviceState, ClockHubError> {
        let state = self.link.fetch_state().await?;
        self.store_anchor(DeviceClock::anchor(state.date.0));
        tracing::debug!(date = %state.date, "device state refreshed");
        Ok(state)
    }

    /// Projected current device time.
    ///
    /// `None` until the device state has been fetched at least once.
    #[must_use]
    pub fn device_now(&self) -> Option<NaiveDateTime> {
        self.anchor
            .lock()
            .ok()
            .and_then(|anchor| anchor.map(|clock| clock.now()))
    }

    /// Push a new wall-clock time to the device.
    ///
    /// On success the local projection is re-anchored at the pushed value;
    /// the device acknowledges before a state read would show it.
    ///
    /// # Errors
    ///
    /// Returns [`ClockHubError::Device`] when the device cannot be reached or
    /// rejects the date.
    #[tracing::instrument(skip(self))]
    pub async fn set_date(&self, instant: NaiveDateTime) -> Result<(), ClockHubError> {
        self.link.set_date(instant).await?;
        self.store_anchor(DeviceClock::anchor(instant));
        tracing::info!(%instant, "device clock set");
        Ok(())
    }

    /// Trigger NTP resynchronization, then re-read the corrected state.
    ///
    /// # Errors
    ///
    /// Returns [`ClockHubError::Device`] when either the resync request or
    /// the follow-up state read fails.
    #[tracing::instrument(skip(self))]
    pub async fn synchronize(&self) -> Result<DeviceState, ClockHubError> {
        self.link.synchronize().await?;
        tracing::info!("device clock resynchronization requested");
        self.refresh().await
    }

    fn store_anchor(&self, clock: DeviceClock) {
        // a poisoned lock only means a panicked writer; drop the anchor
        // update and let the next refresh re-establish it
        if let Ok(mut anchor) = self.anchor.lock() {
            *anchor = Some(clock);
        }
    }
}
