//! Display color scheme for the clock face.
//!
//! The display drives five independently colored element groups. On the wire
//! the scheme is a single string of 30 hexadecimal digits: five concatenated
//! `RRGGBB` values in slot order.

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::ValidationError;

/// Number of independently colored element groups on the display.
pub const SLOT_COUNT: usize = 5;

const HEX_DIGITS_PER_COLOR: usize = 6;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(u32);

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` value. Higher bits are masked
    /// off so the wire form stays six digits.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// The packed `0xRRGGBB` value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// The display element group a color applies to.
///
/// Variant order matches the wire layout of the scheme string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    /// Clock-face tick marks.
    Ticks,
    /// Hour hand during night hours.
    HoursNight,
    /// Hour hand during daylight hours.
    HoursDay,
    /// Minute hand.
    Minutes,
    /// Second hand.
    Seconds,
}

impl ColorSlot {
    /// All slots in wire order.
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::Ticks,
        Self::HoursNight,
        Self::HoursDay,
        Self::Minutes,
        Self::Seconds,
    ];

    const fn index(self) -> usize {
        match self {
            Self::Ticks => 0,
            Self::HoursNight => 1,
            Self::HoursDay => 2,
            Self::Minutes => 3,
            Self::Seconds => 4,
        }
    }
}

/// Colors for all five display element groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme([Rgb; SLOT_COUNT]);

impl ColorScheme {
    /// Build a scheme from colors in wire order.
    #[must_use]
    pub const fn new(colors: [Rgb; SLOT_COUNT]) -> Self {
        Self(colors)
    }

    /// The color assigned to a display element group.
    #[must_use]
    pub fn color(&self, slot: ColorSlot) -> Rgb {
        self.0[slot.index()]
    }

    /// Replace the color of a single display element group.
    pub fn set_color(&mut self, slot: ColorSlot, color: Rgb) {
        self.0[slot.index()] = color;
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for ColorScheme {
    type Err = ValidationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bytes = input.as_bytes();
        if bytes.len() != SLOT_COUNT * HEX_DIGITS_PER_COLOR
            || !bytes.iter().all(u8::is_ascii_hexdigit)
        {
            return Err(ValidationError::MalformedColorScheme);
        }

        let mut colors = [Rgb::new(0); SLOT_COUNT];
        for (index, chunk) in input.as_bytes().chunks(HEX_DIGITS_PER_COLOR).enumerate() {
            // chunks are ASCII hex by the check above
            let digits = std::str::from_utf8(chunk)
                .map_err(|_| ValidationError::MalformedColorScheme)?;
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ValidationError::MalformedColorScheme)?;
            colors[index] = Rgb::new(value);
        }
        Ok(Self(colors))
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid color scheme: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIRE: &str = "0808220000443333AAFF0000001100";

    fn scheme() -> ColorScheme {
        ColorScheme::new([
            Rgb::new(0x080822),
            Rgb::new(0x000044),
            Rgb::new(0x3333AA),
            Rgb::new(0xFF0000),
            Rgb::new(0x001100),
        ])
    }

    #[test]
    fn should_parse_wire_string_into_slot_colors() {
        let parsed: ColorScheme = WIRE.parse().unwrap();
        assert_eq!(parsed, scheme());
        assert_eq!(parsed.color(ColorSlot::Ticks), Rgb::new(0x080822));
        assert_eq!(parsed.color(ColorSlot::Minutes), Rgb::new(0xFF0000));
        assert_eq!(parsed.color(ColorSlot::Seconds), Rgb::new(0x001100));
    }

    #[test]
    fn should_render_canonical_uppercase_wire_string() {
        assert_eq!(scheme().to_string(), WIRE);

        let lowercase: ColorScheme = WIRE.to_lowercase().parse().unwrap();
        assert_eq!(lowercase.to_string(), WIRE);
    }

    #[test]
    fn should_reject_wrong_length() {
        assert_eq!(
            "080822".parse::<ColorScheme>(),
            Err(ValidationError::MalformedColorScheme)
        );
        assert_eq!(
            format!("{WIRE}00").parse::<ColorScheme>(),
            Err(ValidationError::MalformedColorScheme)
        );
        assert_eq!(
            "".parse::<ColorScheme>(),
            Err(ValidationError::MalformedColorScheme)
        );
    }

    #[test]
    fn should_reject_non_hex_digits() {
        assert_eq!(
            "08082200004433ZZAAFF0000001100".parse::<ColorScheme>(),
            Err(ValidationError::MalformedColorScheme)
        );
    }

    #[test]
    fn should_expose_slots_in_wire_order() {
        let parsed: ColorScheme = WIRE.parse().unwrap();
        let rendered: String = ColorSlot::ALL
            .iter()
            .map(|slot| parsed.color(*slot).to_string())
            .collect();
        assert_eq!(rendered, WIRE);
    }

    #[test]
    fn should_replace_a_single_slot() {
        let mut value = scheme();
        value.set_color(ColorSlot::Seconds, Rgb::new(0x00FF00));
        assert_eq!(value.color(ColorSlot::Seconds), Rgb::new(0x00FF00));
        assert_eq!(value.color(ColorSlot::Ticks), Rgb::new(0x080822));
        assert_eq!(value.to_string(), "0808220000443333AAFF000000FF00");
    }

    #[test]
    fn should_mask_out_bits_above_24() {
        assert_eq!(Rgb::new(0xFF123456).value(), 0x123456);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let json = serde_json::to_string(&scheme()).unwrap();
        assert_eq!(json, format!("\"{WIRE}\""));

        let parsed: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scheme());
    }

    #[test]
    fn should_fail_deserialization_on_malformed_scheme() {
        let result = serde_json::from_str::<ColorScheme>("\"nope\"");
        assert!(result.is_err());
    }
}
