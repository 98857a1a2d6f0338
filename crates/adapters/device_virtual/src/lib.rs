//! # clockhub-adapter-device-virtual
//!
//! Simulated clock device for demos and tests.
//!
//! Implements the [`DeviceLink`] port against an in-memory state document,
//! so the full stack can run with no hardware on the network.
//!
//! ## Behaviour
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `fetch_state` | returns the stored document with a ticking `date` |
//! | `set_date` | re-bases the simulated clock at the given instant |
//! | `synchronize` | snaps the simulated clock to the host's local time |
//! | `set_display` | stores brightness and colors |
//! | `save_config` | records that a save happened (observable via [`VirtualClockDevice::saved`]) |
//!
//! ## Dependency rule
//!
//! Depends on `clockhub-app` (port trait) and `clockhub-domain` only.

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDateTime;

use clockhub_app::ports::DeviceLink;
use clockhub_domain::clock::DeviceClock;
use clockhub_domain::error::{ClockHubError, DeviceError};
use clockhub_domain::scheme::{ColorScheme, Rgb};
use clockhub_domain::state::DeviceState;
use clockhub_domain::time::{self, DeviceTime};

struct Inner {
    state: DeviceState,
    clock: DeviceClock,
    saved: bool,
}

/// In-memory clock device.
///
/// The stored `date` field holds the clock base; reads project it forward
/// with a [`DeviceClock`] anchored at the last re-base.
pub struct VirtualClockDevice {
    inner: Mutex<Inner>,
}

impl Default for VirtualClockDevice {
    /// A device with demo settings, booted at the host's current local time.
    fn default() -> Self {
        Self::seeded(demo_state())
    }
}

impl VirtualClockDevice {
    /// Create a device holding exactly the given state document.
    ///
    /// The simulated clock starts ticking from the document's `date`.
    #[must_use]
    pub fn seeded(state: DeviceState) -> Self {
        let clock = DeviceClock::anchor(state.date.0);
        Self {
            inner: Mutex::new(Inner {
                state,
                clock,
                saved: false,
            }),
        }
    }

    /// Whether a configuration save was requested since construction.
    #[must_use]
    pub fn saved(&self) -> bool {
        self.lock().map(|inner| inner.saved).unwrap_or(false)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, ClockHubError> {
        self.inner
            .lock()
            .map_err(|_| DeviceError::new("virtual device state poisoned").into())
    }
}

/// Settings of the demo device: Moscow time, public NTP pool, dim display.
#[must_use]
pub fn demo_state() -> DeviceState {
    DeviceState {
        date: DeviceTime(time::now()),
        timezone: 3,
        daylight: 0,
        ntpenabled: true,
        ntpserver1: "0.pool.ntp.org".to_string(),
        ntpserver2: "1.pool.ntp.org".to_string(),
        ntpserver3: "time.nist.gov".to_string(),
        brightness: 25,
        colors: ColorScheme::new([
            Rgb::new(0x080822),
            Rgb::new(0x000044),
            Rgb::new(0x3333AA),
            Rgb::new(0xFF0000),
            Rgb::new(0x001100),
        ]),
    }
}

impl DeviceLink for VirtualClockDevice {
    fn fetch_state(&self) -> impl Future<Output = Result<DeviceState, ClockHubError>> + Send {
        let result = self.lock().map(|inner| {
            let mut state = inner.state.clone();
            state.date = DeviceTime(inner.clock.now());
            state
        });
        async { result }
    }

    fn set_date(
        &self,
        instant: NaiveDateTime,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        let result = self.lock().map(|mut inner| {
            inner.state.date = DeviceTime(instant);
            inner.clock = DeviceClock::anchor(instant);
        });
        async { result }
    }

    fn synchronize(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        // a real device walks its NTP servers here; the simulation trusts
        // the host clock instead
        let now = time::now();
        let result = self.lock().map(|mut inner| {
            inner.state.date = DeviceTime(now);
            inner.clock = DeviceClock::anchor(now);
        });
        async { result }
    }

    fn set_display(
        &self,
        brightness: u8,
        colors: ColorScheme,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        let result = self.lock().map(|mut inner| {
            inner.state.brightness = brightness;
            inner.state.colors = colors;
        });
        async { result }
    }

    fn save_config(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send {
        let result = self.lock().map(|mut inner| {
            inner.saved = true;
        });
        async { result }
    }
}
