use core::fmt;

use crate::{
    constants::{
        LATITUDE_DEGREE_DIGITS, LONGITUDE_DEGREE_DIGITS, NMEA_SYNC_CHAR, NMEA_TYPE_TOKEN_LEN,
    },
    error::ParserError,
    gps_data::{GpsData, Updated},
    parser::{field, validate_checksum},
};

mod gga;
mod numeric;
mod rmc;

pub use gga::decode_gga;
pub use rmc::decode_rmc;

/// Sentence layouts understood by the decoders
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceKind {
    /// Recommended minimum data: time, date, position, speed and course
    Rmc,
    /// Fix data: position, altitude, fix quality and satellites in use
    Gga,
}

impl SentenceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SentenceKind::Rmc => "RMC",
            SentenceKind::Gga => "GGA",
        }
    }

    fn from_type(ty: &[u8]) -> Option<Self> {
        match ty {
            b"RMC" => Some(SentenceKind::Rmc),
            b"GGA" => Some(SentenceKind::Gga),
            _ => None,
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Talker ID, the two letters in front of the sentence type
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Talker {
    /// `GP`, GPS only receivers
    Gps,
    /// `GN`, multi-constellation receivers
    Gnss,
}

impl Talker {
    pub const fn as_str(self) -> &'static str {
        match self {
            Talker::Gps => "GP",
            Talker::Gnss => "GN",
        }
    }

    fn from_id(id: &[u8]) -> Option<Self> {
        match id {
            b"GP" => Some(Talker::Gps),
            b"GN" => Some(Talker::Gnss),
            _ => None,
        }
    }
}

/// Talker and sentence type of a recognised sentence
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SentenceId {
    pub talker: Talker,
    pub kind: SentenceKind,
}

impl SentenceId {
    /// Identifies a framed sentence from the type token right after `$`.
    ///
    /// Only the first five characters are looked at, so `$GPRMCX,...` is
    /// still an RMC sentence.
    pub fn from_sentence(sentence: &[u8]) -> Option<Self> {
        if sentence.first() != Some(&NMEA_SYNC_CHAR) {
            return None;
        }
        let token = sentence.get(1..=NMEA_TYPE_TOKEN_LEN)?;
        Some(Self {
            talker: Talker::from_id(&token[..2])?,
            kind: SentenceKind::from_type(&token[2..])?,
        })
    }
}

impl fmt::Display for SentenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.talker.as_str(), self.kind)
    }
}

/// Identifies the sentence and checks that it is of the `expect` kind.
fn expect_kind(sentence: &[u8], expect: SentenceKind) -> Result<SentenceId, ParserError> {
    match SentenceId::from_sentence(sentence) {
        Some(id) if id.kind == expect => Ok(id),
        _ => Err(ParserError::UnexpectedSentence { expect }),
    }
}

fn required<'a>(
    sentence: &'a [u8],
    index: usize,
    kind: SentenceKind,
    name: &'static str,
) -> Result<&'a [u8], ParserError> {
    field(sentence, index).ok_or(ParserError::MissingField {
        sentence: kind.as_str(),
        field: name,
    })
}

/// Latitude and longitude from the four fields starting at `lat_index`
/// (`ddmm.mm,N,dddmm.mm,E`). `None` unless all four are usable.
fn position(sentence: &[u8], lat_index: usize) -> Option<(f64, f64)> {
    let lat = field(sentence, lat_index)?;
    let ns = field(sentence, lat_index + 1)?;
    let lon = field(sentence, lat_index + 2)?;
    let ew = field(sentence, lat_index + 3)?;
    Some((
        numeric::parse_coordinate(
            lat,
            LATITUDE_DEGREE_DIGITS,
            matches!(ns.first(), Some(b'S' | b's')),
        )?,
        numeric::parse_coordinate(
            lon,
            LONGITUDE_DEGREE_DIGITS,
            matches!(ew.first(), Some(b'W' | b'w')),
        )?,
    ))
}

/// Decodes a framed sentence whose checksum has already been validated.
pub(crate) fn decode_verified(
    sentence: &[u8],
    data: &mut GpsData,
) -> Result<(SentenceId, Updated), ParserError> {
    let id = SentenceId::from_sentence(sentence).ok_or(ParserError::UnknownSentence)?;
    let updated = match id.kind {
        SentenceKind::Rmc => rmc::decode_fields(sentence, data)?,
        SentenceKind::Gga => gga::decode_fields(sentence, data)?,
    };
    Ok((id, updated))
}

/// Validates the checksum of `sentence`, then decodes it with the matching decoder.
pub fn decode(sentence: &[u8], data: &mut GpsData) -> Result<(SentenceId, Updated), ParserError> {
    validate_checksum(sentence)?;
    decode_verified(sentence, data)
}
