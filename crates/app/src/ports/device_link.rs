//! Device link port — the control surface of a clock/display device.

use std::future::Future;

use chrono::NaiveDateTime;

use clockhub_domain::error::ClockHubError;
use clockhub_domain::scheme::ColorScheme;
use clockhub_domain::state::DeviceState;

/// Outbound port to a clock/display device.
///
/// Implementations live in adapter crates: one speaks the real device's HTTP
/// endpoints, another simulates a device in memory. Every operation is a
/// single request/response exchange; the device never pushes.
pub trait DeviceLink {
    /// Read the full device state document.
    fn fetch_state(&self) -> impl Future<Output = Result<DeviceState, ClockHubError>> + Send;

    /// Set the device wall clock to the given instant.
    fn set_date(
        &self,
        instant: NaiveDateTime,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send;

    /// Ask the device to resynchronize its clock against its NTP servers.
    ///
    /// The device acknowledges before the corrected time is observable; a
    /// subsequent [`fetch_state`](Self::fetch_state) reports the outcome.
    fn synchronize(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send;

    /// Apply display brightness and color scheme.
    fn set_display(
        &self,
        brightness: u8,
        colors: ColorScheme,
    ) -> impl Future<Output = Result<(), ClockHubError>> + Send;

    /// Persist the device's current settings to its non-volatile storage.
    fn save_config(&self) -> impl Future<Output = Result<(), ClockHubError>> + Send;
}
