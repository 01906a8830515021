use super::{
    expect_kind,
    numeric::{parse_decimal, two_digits},
    position, required, SentenceKind,
};
use crate::{
    constants::{DEFAULT_DAY, DEFAULT_MONTH, DEFAULT_YEAR, KNOTS_TO_KMH},
    error::ParserError,
    gps_data::{GpsData, Updated},
    parser::{field, validate_checksum},
};

const TIME: usize = 1;
const STATUS: usize = 2;
const LATITUDE: usize = 3;
const SPEED: usize = 7;
const COURSE: usize = 8;
const DATE: usize = 9;

/// Decodes a `$GPRMC`/`$GNRMC` sentence into `data`.
///
/// The sentence is rejected, leaving `data` untouched, when it is not RMC,
/// when its checksum does not match, or when the time, status or date field is
/// empty. Out-of-range time and date components are replaced instead of
/// rejecting the sentence: time components by 0, day and month by 1.
///
/// Position, speed and course are only written when the status is `A`; a void
/// fix keeps whatever the record held before. Speed is stored in km/h.
pub fn decode_rmc(sentence: &[u8], data: &mut GpsData) -> Result<Updated, ParserError> {
    expect_kind(sentence, SentenceKind::Rmc)?;
    validate_checksum(sentence)?;
    decode_fields(sentence, data)
}

pub(super) fn decode_fields(sentence: &[u8], data: &mut GpsData) -> Result<Updated, ParserError> {
    let time = required(sentence, TIME, SentenceKind::Rmc, "time")?;
    let status = required(sentence, STATUS, SentenceKind::Rmc, "status")?;
    let date = required(sentence, DATE, SentenceKind::Rmc, "date")?;

    (data.hour, data.minute, data.second) = parse_time(time);
    (data.day, data.month, data.year) = parse_date(date);
    let mut updated = Updated::TIME | Updated::DATE | Updated::STATUS;

    let fix = matches!(status.first(), Some(b'A' | b'a'));
    if fix {
        if let Some((lat, lon)) = position(sentence, LATITUDE) {
            data.latitude = lat;
            data.longitude = lon;
            updated |= Updated::POSITION;
        }
        if let Some(speed) = field(sentence, SPEED) {
            data.speed = parse_decimal::<f32>(speed) * KNOTS_TO_KMH;
            updated |= Updated::MOTION;
        }
        if let Some(course) = field(sentence, COURSE) {
            data.course = parse_decimal(course);
            updated |= Updated::MOTION;
        }
    }

    data.has_fix = fix;
    data.data_valid = true;
    Ok(updated)
}

fn within(value: u8, min: u8, max: u8, fallback: u8) -> u8 {
    if (min..=max).contains(&value) {
        value
    } else {
        fallback
    }
}

/// `HHMMSS[.sss]`, a field shorter than six characters reads as midnight.
fn parse_time(text: &[u8]) -> (u8, u8, u8) {
    if text.len() < 6 {
        return (0, 0, 0);
    }
    (
        within(two_digits(text, 0), 0, 23, 0),
        within(two_digits(text, 2), 0, 59, 0),
        within(two_digits(text, 4), 0, 59, 0),
    )
}

/// `DDMMYY`, a field shorter than six characters reads as the default date.
fn parse_date(text: &[u8]) -> (u8, u8, u8) {
    if text.len() < 6 {
        return (DEFAULT_DAY, DEFAULT_MONTH, DEFAULT_YEAR);
    }
    (
        within(two_digits(text, 0), 1, 31, DEFAULT_DAY),
        within(two_digits(text, 2), 1, 12, DEFAULT_MONTH),
        within(two_digits(text, 4), 0, 99, DEFAULT_YEAR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RMC: &[u8] = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

    #[test]
    fn test_decode() {
        let mut data = GpsData::default();
        let updated = decode_rmc(RMC, &mut data).unwrap();
        assert_eq!((data.hour, data.minute, data.second), (12, 35, 19));
        assert_eq!((data.day, data.month, data.year), (23, 3, 94));
        assert!((data.latitude - 48.1173).abs() < 1e-4);
        assert!((data.longitude - 11.5167).abs() < 1e-4);
        assert!((data.speed - 22.4 * 1.852).abs() < 1e-3);
        assert!((data.course - 84.4).abs() < 1e-4);
        assert!(data.has_fix);
        assert!(data.data_valid);
        assert!(updated.contains(Updated::POSITION | Updated::MOTION | Updated::DATE));
    }

    #[test]
    fn test_wrong_kind() {
        let mut data = GpsData::default();
        let gga = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
        assert_eq!(
            decode_rmc(gga, &mut data),
            Err(ParserError::UnexpectedSentence {
                expect: SentenceKind::Rmc
            })
        );
        assert_eq!(data, GpsData::default());
    }

    #[test]
    fn test_bad_checksum() {
        let mut data = GpsData::default();
        let bad = b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B";
        assert!(matches!(
            decode_rmc(bad, &mut data),
            Err(ParserError::InvalidChecksum { .. })
        ));
        assert_eq!(data, GpsData::default());
    }

    #[test]
    fn test_missing_date_leaves_record_untouched() {
        let mut data = GpsData::default();
        assert_eq!(
            decode_fields(b"$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,,,", &mut data),
            Err(ParserError::MissingField {
                sentence: "RMC",
                field: "date"
            })
        );
        assert_eq!(data, GpsData::default());
    }

    #[test]
    fn test_missing_status() {
        let mut data = GpsData::default();
        let err = decode_fields(b"$GPRMC,123519,,,,,,,,230394", &mut data).unwrap_err();
        assert_eq!(
            err,
            ParserError::MissingField {
                sentence: "RMC",
                field: "status"
            }
        );
    }

    #[test]
    fn test_void_keeps_position() {
        let mut data = GpsData {
            latitude: 1.5,
            longitude: -2.5,
            speed: 3.0,
            course: 4.0,
            has_fix: true,
            ..GpsData::default()
        };
        let updated = decode_fields(
            b"$GPRMC,123519,V,4807.038,N,01131.000,E,022.4,084.4,230394,,",
            &mut data,
        )
        .unwrap();
        assert_eq!((data.latitude, data.longitude), (1.5, -2.5));
        assert_eq!((data.speed, data.course), (3.0, 4.0));
        assert!(!data.has_fix);
        assert!(data.data_valid);
        assert!(!updated.intersects(Updated::POSITION | Updated::MOTION));
    }

    #[test]
    fn test_lowercase_status_and_hemisphere() {
        let mut data = GpsData::default();
        decode_fields(b"$GNRMC,000000,a,3345.000,s,07030.000,w,,,010125", &mut data).unwrap();
        assert!(data.has_fix);
        assert!((data.latitude + 33.75).abs() < 1e-9);
        assert!((data.longitude + 70.5).abs() < 1e-9);
        assert_eq!(data.speed, 0.0);
    }

    #[test]
    fn test_out_of_range_components_are_normalised() {
        let mut data = GpsData::default();
        decode_fields(b"$GPRMC,246075,V,,,,,,,321399", &mut data).unwrap();
        assert_eq!((data.hour, data.minute, data.second), (0, 0, 0));
        assert_eq!((data.day, data.month, data.year), (1, 1, 99));
    }

    #[test]
    fn test_day_and_month_zero() {
        assert_eq!(parse_date(b"000024"), (1, 1, 24));
    }

    #[test]
    fn test_short_time_and_date() {
        assert_eq!(parse_time(b"1235"), (0, 0, 0));
        assert_eq!(parse_date(b"2303"), (1, 1, DEFAULT_YEAR));
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(parse_time(b"235959.99"), (23, 59, 59));
    }
}
