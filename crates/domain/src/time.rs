//! Device timestamps and their wire encoding.
//!
//! The device exchanges dates as 16-character tokens of the form
//! `YYYYMMDDTHHMMSSZ`. The trailing `Z` is part of the token layout, not a
//! UTC marker: the token carries whatever wall clock the device happens to
//! run, so the decoded value is a [`NaiveDateTime`] with no timezone
//! attached.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::ValidationError;

/// Length in bytes of a wire token.
pub const TOKEN_LEN: usize = 16;

/// Format a wall-clock instant as a device token.
///
/// Each numeric field is zero-padded to its fixed width (year to four digits,
/// the rest to two) and concatenated around the literal `T` and `Z` markers.
/// Pure formatting with no error path: [`NaiveDateTime`] already guarantees
/// calendar-valid fields, and sub-second precision is dropped.
#[must_use]
pub fn encode(instant: &NaiveDateTime) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}Z",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second()
    )
}

/// Parse a device token back into a wall-clock instant.
///
/// The input must match the fixed layout exactly: 16 bytes, `T` and `Z` at
/// positions 8 and 15, ASCII digits everywhere else, and the six numeric
/// fields must form a valid calendar date/time (month 13 or day 32 fail
/// here). Any failure yields `None`; callers cannot distinguish a layout
/// mismatch from an impossible date, and must treat both as "no valid
/// timestamp".
#[must_use]
pub fn decode(input: &str) -> Option<NaiveDateTime> {
    let bytes = input.as_bytes();
    if bytes.len() != TOKEN_LEN || bytes[8] != b'T' || bytes[15] != b'Z' {
        return None;
    }

    let year = parse_digits(&bytes[0..4])?;
    let month = parse_digits(&bytes[4..6])?;
    let day = parse_digits(&bytes[6..8])?;
    let hour = parse_digits(&bytes[9..11])?;
    let minute = parse_digits(&bytes[11..13])?;
    let second = parse_digits(&bytes[13..15])?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?
        .and_hms_opt(hour, minute, second)
}

/// Parse a fixed-width run of ASCII digits into an integer.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    let mut value = 0u32;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Some(value)
}

/// Current wall-clock time on this host, truncated to whole seconds.
///
/// Truncation keeps the value round-trippable through the wire token, which
/// carries no sub-second precision.
#[must_use]
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// A wall-clock instant that crosses the wire as a device token.
///
/// Thin wrapper over [`NaiveDateTime`] whose serde and display forms are the
/// token itself, for use in documents exchanged with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeviceTime(pub NaiveDateTime);

impl From<NaiveDateTime> for DeviceTime {
    fn from(instant: NaiveDateTime) -> Self {
        Self(instant)
    }
}

impl fmt::Display for DeviceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.0))
    }
}

impl FromStr for DeviceTime {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        decode(input)
            .map(Self)
            .ok_or(ValidationError::InvalidTimestamp)
    }
}

impl Serialize for DeviceTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DeviceTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid device timestamp: {raw:?}")))
    }
}
