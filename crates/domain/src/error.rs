//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ClockHubError`] via `#[from]`. Adapters wrap their transport failures in
//! [`DeviceError`]; domain invariant checks produce [`ValidationError`].

/// A domain invariant was violated.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A string did not decode as a device timestamp token.
    #[error("not a valid device timestamp")]
    InvalidTimestamp,
    /// Timezone offset outside the range the device accepts.
    #[error("timezone offset {0} is out of range -12..=14")]
    TimezoneOutOfRange(i8),
    /// Daylight-saving offset outside the range the device accepts.
    #[error("daylight offset {0} is out of range 0..=2")]
    DaylightOutOfRange(i8),
    /// NTP is enabled but no primary server is configured.
    #[error("primary ntp server must not be empty while ntp is enabled")]
    MissingNtpServer,
    /// A color scheme string is not exactly 30 hexadecimal digits.
    #[error("color scheme must be exactly 30 hexadecimal digits")]
    MalformedColorScheme,
}

/// The device could not be reached or rejected a request.
///
/// Produced by device link adapters; the original cause is flattened to a
/// message so the domain stays free of transport types.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DeviceError {
    /// Description of the failure.
    pub message: String,
}

impl DeviceError {
    /// Build a device error from any displayable cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Top-level error for hub operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockHubError {
    /// Caller input violated a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),
    /// Talking to the device failed.
    #[error("device link error")]
    Device(#[from] DeviceError),
}
