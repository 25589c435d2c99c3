//! Length type used for tab-stop positions.
//!
//! Positions are carried in English Metric Units (EMU), the integer unit
//! WordprocessingML tooling uses for layout distances. Tab stops themselves
//! are persisted in twips, so every position written to the tree is
//! quantized to a multiple of [`EMU_PER_TWIP`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// EMU in one inch.
pub const EMU_PER_INCH: i64 = 914_400;
/// EMU in one centimeter.
pub const EMU_PER_CM: i64 = 360_000;
/// EMU in one millimeter.
pub const EMU_PER_MM: i64 = 36_000;
/// EMU in one point.
pub const EMU_PER_PT: i64 = 12_700;
/// EMU in one twip (a twentieth of a point).
pub const EMU_PER_TWIP: i64 = 635;

/// A signed linear distance in EMU.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Length(i64);

impl Length {
    /// Zero distance.
    pub const ZERO: Length = Length(0);

    /// Create a length from raw EMU.
    pub const fn emu(value: i64) -> Self {
        Self(value)
    }

    /// Create a length from whole twips, saturating at the `i64` range.
    pub const fn twips(value: i64) -> Self {
        Self(value.saturating_mul(EMU_PER_TWIP))
    }

    /// Create a length from whole twips, or `None` if it does not fit in EMU.
    pub const fn checked_twips(value: i64) -> Option<Self> {
        match value.checked_mul(EMU_PER_TWIP) {
            Some(emu) => Some(Self(emu)),
            None => None,
        }
    }

    /// Create a length from inches.
    pub fn inches(value: f64) -> Self {
        Self::scaled(value, EMU_PER_INCH)
    }

    /// Create a length from centimeters.
    pub fn cm(value: f64) -> Self {
        Self::scaled(value, EMU_PER_CM)
    }

    /// Create a length from millimeters.
    pub fn mm(value: f64) -> Self {
        Self::scaled(value, EMU_PER_MM)
    }

    /// Create a length from points.
    pub fn pt(value: f64) -> Self {
        Self::scaled(value, EMU_PER_PT)
    }

    fn scaled(value: f64, factor: i64) -> Self {
        Self((value * factor as f64).round() as i64)
    }

    /// Raw EMU value.
    pub const fn as_emu(self) -> i64 {
        self.0
    }

    /// Value in inches.
    pub fn as_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }

    /// Value in centimeters.
    pub fn as_cm(self) -> f64 {
        self.0 as f64 / EMU_PER_CM as f64
    }

    /// Value in millimeters.
    pub fn as_mm(self) -> f64 {
        self.0 as f64 / EMU_PER_MM as f64
    }

    /// Value in points.
    pub fn as_pt(self) -> f64 {
        self.0 as f64 / EMU_PER_PT as f64
    }

    /// Value in twips, rounded to the nearest whole twip.
    pub fn as_twips(self) -> i64 {
        (self.0 as f64 / EMU_PER_TWIP as f64).round() as i64
    }

    /// This length rounded to the nearest whole twip.
    pub fn to_twip_precision(self) -> Self {
        Self::twips(self.as_twips())
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EMU", self.0)
    }
}

impl FromStr for Length {
    type Err = Error;

    /// Parse `1.75in`, `2cm`, `10mm`, `36pt`, `720tw`, `914400emu` or a bare
    /// EMU integer.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidLength(s.to_string());

        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let number = number.trim();

        match unit.trim().to_ascii_lowercase().as_str() {
            "" | "emu" => number.parse::<i64>().map(Length::emu).map_err(|_| invalid()),
            "tw" | "twip" | "twips" => number
                .parse::<i64>()
                .ok()
                .and_then(Length::checked_twips)
                .ok_or_else(invalid),
            unit => {
                let value: f64 = number.parse().map_err(|_| invalid())?;
                if !value.is_finite() {
                    return Err(invalid());
                }
                match unit {
                    "in" | "inch" | "inches" => Ok(Length::inches(value)),
                    "cm" => Ok(Length::cm(value)),
                    "mm" => Ok(Length::mm(value)),
                    "pt" => Ok(Length::pt(value)),
                    _ => Err(invalid()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(Length::inches(1.0).as_emu(), 914_400);
        assert_eq!(Length::inches(1.75).as_emu(), 1_600_200);
        assert_eq!(Length::inches(-0.5).as_emu(), -457_200);
        assert_eq!(Length::inches(2.0).as_inches(), 2.0);
    }

    #[test]
    fn test_twips() {
        assert_eq!(Length::twips(1440), Length::inches(1.0));
        assert_eq!(Length::inches(1.75).as_twips(), 2520);
        assert_eq!(Length::emu(-457_200).as_twips(), -720);
        // 1000 EMU is closer to 2 twips (1270) than to 1 twip (635)
        assert_eq!(Length::emu(1000).to_twip_precision(), Length::emu(1270));
    }

    #[test]
    fn test_other_units() {
        assert_eq!(Length::pt(72.0), Length::inches(1.0));
        assert_eq!(Length::cm(2.54), Length::inches(1.0));
        assert_eq!(Length::mm(10.0), Length::cm(1.0));
        assert_eq!(Length::inches(1.0).as_pt(), 72.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("1.75in".parse::<Length>().unwrap(), Length::inches(1.75));
        assert_eq!("-0.5 in".parse::<Length>().unwrap(), Length::inches(-0.5));
        assert_eq!("720tw".parse::<Length>().unwrap(), Length::twips(720));
        assert_eq!("36pt".parse::<Length>().unwrap(), Length::pt(36.0));
        assert_eq!("914400".parse::<Length>().unwrap(), Length::inches(1.0));
        assert_eq!("2CM".parse::<Length>().unwrap(), Length::cm(2.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "".parse::<Length>(),
            Err(Error::InvalidLength(_))
        ));
        assert!("1.5furlongs".parse::<Length>().is_err());
        assert!("1.5".parse::<Length>().is_err());
        assert!("in".parse::<Length>().is_err());
    }

    #[test]
    fn test_parse_twips_overflow() {
        assert!(matches!(
            "99999999999999999tw".parse::<Length>(),
            Err(Error::InvalidLength(_))
        ));
        assert!("-99999999999999999tw".parse::<Length>().is_err());
    }

    #[test]
    fn test_twips_saturate() {
        assert_eq!(Length::checked_twips(i64::MAX / 2), None);
        assert_eq!(Length::checked_twips(-720), Some(Length::emu(-457_200)));
        assert_eq!(Length::twips(i64::MAX / 2), Length::emu(i64::MAX));
        assert_eq!(Length::twips(i64::MIN / 2), Length::emu(i64::MIN));

        let huge = Length::inches(1e300);
        assert_eq!(huge, Length::emu(i64::MAX));
        for length in [huge, Length::inches(-1e300)] {
            let rounded = length.to_twip_precision();
            assert_eq!(rounded.as_emu() % EMU_PER_TWIP, 0);
            assert!((rounded.as_emu() - length.as_emu()).abs() < EMU_PER_TWIP);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Length::inches(-1.0) < Length::ZERO);
        assert!(Length::inches(1.0) < Length::inches(1.75));
    }
}
