use super::{
    expect_kind,
    numeric::{parse_decimal, parse_uint},
    position, required, SentenceKind,
};
use crate::{
    error::ParserError,
    gps_data::{GpsData, Updated},
    parser::{field, validate_checksum},
};

const LATITUDE: usize = 2;
const QUALITY: usize = 6;
const SATELLITES: usize = 7;
const HDOP: usize = 8;
const ALTITUDE: usize = 9;

/// Decodes a `$GPGGA`/`$GNGGA` sentence into `data`.
///
/// Only the fix quality field is required. Position, HDOP and altitude are
/// written when the quality is non-zero, the satellite count always.
pub fn decode_gga(sentence: &[u8], data: &mut GpsData) -> Result<Updated, ParserError> {
    expect_kind(sentence, SentenceKind::Gga)?;
    validate_checksum(sentence)?;
    decode_fields(sentence, data)
}

pub(super) fn decode_fields(sentence: &[u8], data: &mut GpsData) -> Result<Updated, ParserError> {
    let quality: u8 = parse_uint(required(sentence, QUALITY, SentenceKind::Gga, "quality")?);

    data.quality = quality;
    let mut updated = Updated::QUALITY | Updated::STATUS;
    if let Some(satellites) = field(sentence, SATELLITES) {
        data.satellites = parse_uint(satellites);
    }

    if quality > 0 {
        if let Some((lat, lon)) = position(sentence, LATITUDE) {
            data.latitude = lat;
            data.longitude = lon;
            updated |= Updated::POSITION;
        }
        if let Some(hdop) = field(sentence, HDOP) {
            data.hdop = parse_decimal(hdop);
        }
        if let Some(altitude) = field(sentence, ALTITUDE) {
            data.altitude = parse_decimal(altitude);
            updated |= Updated::ALTITUDE;
        }
    }

    data.has_fix = quality > 0;
    data.data_valid = true;
    Ok(updated)
}
