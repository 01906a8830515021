use bitflags::bitflags;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{constants::KNOTS_TO_KMH, error::DateTimeError};

/// The GPS state record.
///
/// Owned by the caller and updated in place by every successful decode. A
/// sentence only writes the fields it carries, so values from earlier
/// sentences stay around: an RMC update does not clear the altitude of a
/// previous GGA.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GpsData {
    /// UTC hour, 0-23
    pub hour: u8,
    /// UTC minute, 0-59
    pub minute: u8,
    /// UTC second, 0-59
    pub second: u8,
    /// Day of month, 1-31
    pub day: u8,
    /// Month, 1-12
    pub month: u8,
    /// Two-digit year (0-99), NMEA carries no century
    pub year: u8,

    /// Latitude in decimal degrees, positive north
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east
    pub longitude: f64,

    /// Speed over ground in km/h, converted from the knots sent by the receiver
    pub speed: f32,
    /// Course over ground in degrees
    pub course: f32,

    /// Raw GGA fix quality code, see [`GpsData::fix_quality`]
    pub quality: u8,
    /// Number of satellites in use
    pub satellites: u8,
    /// Horizontal dilution of precision, lower is better
    pub hdop: f32,
    /// Altitude above mean sea level in meters
    pub altitude: f32,

    /// Set once any sentence has been decoded
    pub data_valid: bool,
    /// Fix status reported by the most recently decoded sentence
    pub has_fix: bool,
}

impl GpsData {
    pub const fn new() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            day: 0,
            month: 0,
            year: 0,
            latitude: 0.0,
            longitude: 0.0,
            speed: 0.0,
            course: 0.0,
            quality: 0,
            satellites: 0,
            hdop: 0.0,
            altitude: 0.0,
            data_valid: false,
            has_fix: false,
        }
    }

    pub fn fix_quality(&self) -> FixQuality {
        FixQuality::from(self.quality)
    }

    /// Speed over ground in knots
    pub fn speed_knots(&self) -> f32 {
        self.speed / KNOTS_TO_KMH
    }

    /// Date of the last RMC sentence, years are taken to be in 2000-2099.
    pub fn date(&self) -> Result<NaiveDate, DateTimeError> {
        NaiveDate::from_ymd_opt(
            2000 + i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
        .ok_or(DateTimeError::InvalidDate)
    }

    pub fn time(&self) -> Result<NaiveTime, DateTimeError> {
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .ok_or(DateTimeError::InvalidTime)
    }

    /// UTC date and time of the last RMC sentence.
    pub fn datetime(&self) -> Result<NaiveDateTime, DateTimeError> {
        Ok(NaiveDateTime::new(self.date()?, self.time()?))
    }
}

/// Fix quality indicator of the GGA sentence
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixQuality {
    Invalid,
    Gps,
    Dgps,
    Pps,
    Rtk,
    FloatRtk,
    /// Dead reckoning
    Estimated,
    Manual,
    Simulation,
    Other(u8),
}

impl From<u8> for FixQuality {
    fn from(code: u8) -> Self {
        match code {
            0 => FixQuality::Invalid,
            1 => FixQuality::Gps,
            2 => FixQuality::Dgps,
            3 => FixQuality::Pps,
            4 => FixQuality::Rtk,
            5 => FixQuality::FloatRtk,
            6 => FixQuality::Estimated,
            7 => FixQuality::Manual,
            8 => FixQuality::Simulation,
            other => FixQuality::Other(other),
        }
    }
}

impl FixQuality {
    pub fn is_fix(self) -> bool {
        self != FixQuality::Invalid
    }
}

bitflags! {
    /// Groups of [`GpsData`] fields written by the last decoded sentence
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Updated: u8 {
        const TIME = 1;
        const DATE = 2;
        const POSITION = 4;
        /// Speed and/or course
        const MOTION = 8;
        /// Fix quality, satellite count and HDOP
        const QUALITY = 0x10;
        const ALTITUDE = 0x20;
        /// `has_fix` and `data_valid`
        const STATUS = 0x40;
    }
}
