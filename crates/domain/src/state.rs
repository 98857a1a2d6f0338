//! The device state document.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scheme::ColorScheme;
use crate::time::DeviceTime;

/// Full state document reported by the device.
///
/// Field names follow the device's JSON verbatim so the document round-trips
/// through its state endpoint without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Device wall-clock time at the moment the document was produced.
    pub date: DeviceTime,
    /// Timezone offset in hours east of UTC.
    pub timezone: i8,
    /// Daylight-saving offset in hours.
    pub daylight: i8,
    /// Whether the device keeps its clock through NTP.
    pub ntpenabled: bool,
    /// Primary NTP server host.
    pub ntpserver1: String,
    /// Secondary NTP server host, may be empty.
    pub ntpserver2: String,
    /// Tertiary NTP server host, may be empty.
    pub ntpserver3: String,
    /// Display brightness on the panel's full 8-bit scale.
    pub brightness: u8,
    /// Display color scheme.
    pub colors: ColorScheme,
}

impl DeviceState {
    /// Check the semantic invariants the wire format cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(-12..=14).contains(&self.timezone) {
            return Err(ValidationError::TimezoneOutOfRange(self.timezone));
        }
        if !(0..=2).contains(&self.daylight) {
            return Err(ValidationError::DaylightOutOfRange(self.daylight));
        }
        if self.ntpenabled && self.ntpserver1.trim().is_empty() {
            return Err(ValidationError::MissingNtpServer);
        }
        Ok(())
    }
}
